mod draw;

use draw::{draw_detections, rgb_to_argb};
use minifb::{Key, Window, WindowOptions};
use percept_base::init_stdout_logger;
use percept_camera::{Camera, CameraConfig, CameraError, V4l2Camera};
use percept_image::FrameProcessor;
use percept_infer::{Device, ModelSource, OnnxBackend, YoloDetector, PERSON_CLASS_ID};
use std::env;
use std::path::PathBuf;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

/// Convert an HWC Tensor<u8> frame to the Tensor<f32> the detector expects
fn tensor_u8_to_f32(
    t: &percept_base::Tensor<u8>,
) -> Result<percept_base::Tensor<f32>, percept_base::TensorError> {
    percept_base::Tensor::new(t.shape.clone(), t.data.iter().map(|&v| v as f32).collect())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    // Configuration from environment
    let model_path: PathBuf = env::var("PERCEPT_MODEL_PATH")
        .unwrap_or_else(|_| "models/yolov8n.onnx".to_string())
        .into();
    let camera_device =
        env::var("PERCEPT_CAMERA_DEVICE").unwrap_or_else(|_| "/dev/video0".to_string());
    let ops_spec = env::var("PERCEPT_OPS").unwrap_or_default();

    log::info!("Camera Detect");
    log::info!("Model: {}", model_path.display());
    log::info!("Camera: {}", camera_device);
    log::info!("Resolution: {}x{}", WIDTH, HEIGHT);
    log::info!("Controls: Q to exit");

    // Initialize camera
    let config = CameraConfig::default()
        .with_device(camera_device)
        .with_width(WIDTH as u32)
        .with_height(HEIGHT as u32);
    let mut camera = V4l2Camera::new(config)?;
    log::info!("Camera ready");

    // Initialize person detector
    let backend = OnnxBackend::new(Device::Cpu);
    let mut detector = YoloDetector::new(ModelSource::File(model_path), &backend)?
        .with_class_filter(PERSON_CLASS_ID);
    log::info!("Model loaded");

    // Frame processing chain
    let processor = FrameProcessor::parse(&ops_spec)?;
    if !processor.is_empty() {
        log::info!("Frame ops: {:?}", processor.ops());
    }

    // Create display window
    let mut window = Window::new(
        "Camera Detect - Q to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;

    // Limit to max 30 FPS
    window.set_target_fps(30);

    log::info!("Starting main loop");

    // Main loop
    while window.is_open() && !window.is_key_down(Key::Q) {
        // Capture frame; end of stream terminates the loop
        let mut frame = match camera.recv().await {
            Ok(frame) => frame,
            Err(CameraError::Stream(msg)) | Err(CameraError::Channel(msg)) => {
                log::info!("Capture stream ended: {}", msg);
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if frame.is_empty() {
            break;
        }

        if frame.shape.len() != 3 || frame.shape[2] != 3 {
            log::warn!("Expected [H, W, 3] frame shape, got {:?}", frame.shape);
            continue;
        }

        let frame_h = frame.shape[0];
        let frame_w = frame.shape[1];

        // Detect persons on the raw frame
        let frame_f32 = tensor_u8_to_f32(&frame)?;
        let detections = detector.detect(&frame_f32)?;

        // Apply the processing chain, then overlay detections on top
        processor.process(&mut frame)?;
        draw_detections(&mut frame.data, frame_w, frame_h, &detections);

        // Convert RGB -> ARGB and display
        let argb = rgb_to_argb(&frame.data, frame_w, frame_h);
        window.update_with_buffer(&argb, frame_w, frame_h)?;
    }

    log::info!("Exiting");

    // Dropping the camera joins the capture thread and releases the device;
    // dropping the window destroys it.
    Ok(())
}
