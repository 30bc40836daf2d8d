use percept_base::Tensor;
use percept_camera::{Camera, CameraError};

// Mock implementation for testing
struct MockCamera {
    frame_count: usize,
    frames_until_empty: usize,
}

impl MockCamera {
    fn new(frames_until_empty: usize) -> Self {
        Self {
            frame_count: 0,
            frames_until_empty,
        }
    }
}

impl Camera for MockCamera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        self.frame_count += 1;
        if self.frame_count > self.frames_until_empty {
            // Stream exhausted: yield an empty frame
            return Tensor::new(vec![0, 0, 3], vec![])
                .map_err(|e| CameraError::Stream(e.to_string()));
        }
        // Return a dummy 2x2 RGB tensor
        Tensor::new(vec![2, 2, 3], vec![0u8; 12]).map_err(|e| CameraError::Stream(e.to_string()))
    }
}

#[tokio::test]
async fn test_camera_trait_mock_implementation() {
    let mut cam = MockCamera::new(10);

    // First frame
    let frame1 = cam.recv().await.unwrap();
    assert_eq!(frame1.shape, vec![2, 2, 3]);
    assert_eq!(cam.frame_count, 1);

    // Second frame
    let frame2 = cam.recv().await.unwrap();
    assert_eq!(frame2.shape, vec![2, 2, 3]);
    assert_eq!(cam.frame_count, 2);
}

#[tokio::test]
async fn test_camera_trait_polymorphism() {
    async fn capture_frames(
        camera: &mut impl Camera,
        count: usize,
    ) -> Result<Vec<Tensor<u8>>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(camera.recv().await?);
        }
        Ok(frames)
    }

    let mut cam = MockCamera::new(10);
    let frames = capture_frames(&mut cam, 3).await.unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(cam.frame_count, 3);
}

#[tokio::test]
async fn test_capture_until_empty_frame() {
    // The loop termination contract: capture until the camera yields an
    // empty frame, then stop.
    let mut cam = MockCamera::new(3);

    let mut captured = 0;
    loop {
        let frame = cam.recv().await.unwrap();
        if frame.is_empty() {
            break;
        }
        captured += 1;
    }

    assert_eq!(captured, 3);
}
