use percept_base::Tensor;
use percept_infer::{preprocess, LetterboxInfo};

#[test]
fn test_letterbox_info_creation() {
    let info = LetterboxInfo {
        scale: 0.5,
        pad_x: 10.0,
        pad_y: 20.0,
    };
    assert_eq!(info.scale, 0.5);
    assert_eq!(info.pad_x, 10.0);
    assert_eq!(info.pad_y, 20.0);
}

#[test]
fn test_preprocess_square_image_640x640() {
    // 640x640 image should have no padding
    let image = Tensor::zeros(vec![640, 640, 3]).unwrap();
    let (preprocessed, letterbox) = preprocess(&image).unwrap();

    // Output shape should be [1, 3, 640, 640] (NCHW)
    assert_eq!(preprocessed.shape, vec![1, 3, 640, 640]);

    // No padding needed
    assert_eq!(letterbox.scale, 1.0);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 0.0);
}

#[test]
fn test_preprocess_wide_image_320x640() {
    // 320x640 image (width > height) should be padded vertically
    let image = Tensor::zeros(vec![320, 640, 3]).unwrap();
    let (preprocessed, letterbox) = preprocess(&image).unwrap();

    assert_eq!(preprocessed.shape, vec![1, 3, 640, 640]);

    // Scale should be 1.0 (640/640)
    assert_eq!(letterbox.scale, 1.0);

    // Horizontal padding should be 0
    assert_eq!(letterbox.pad_x, 0.0);

    // Vertical padding should be (640 - 320) / 2 = 160
    assert_eq!(letterbox.pad_y, 160.0);
}

#[test]
fn test_preprocess_tall_image_640x320() {
    // 640x320 image (height > width) should be padded horizontally
    let image = Tensor::zeros(vec![640, 320, 3]).unwrap();
    let (preprocessed, letterbox) = preprocess(&image).unwrap();

    assert_eq!(preprocessed.shape, vec![1, 3, 640, 640]);
    assert_eq!(letterbox.scale, 1.0);
    assert_eq!(letterbox.pad_x, 160.0);
    assert_eq!(letterbox.pad_y, 0.0);
}

#[test]
fn test_preprocess_upscales_small_image() {
    // 320x320 scales up by 2 with no padding
    let image = Tensor::zeros(vec![320, 320, 3]).unwrap();
    let (preprocessed, letterbox) = preprocess(&image).unwrap();

    assert_eq!(preprocessed.shape, vec![1, 3, 640, 640]);
    assert_eq!(letterbox.scale, 2.0);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 0.0);
}

#[test]
fn test_preprocess_normalizes_values() {
    // All pixels 255 -> all content values 1.0
    let data = vec![255.0f32; 640 * 640 * 3];
    let image = Tensor::new(vec![640, 640, 3], data).unwrap();
    let (preprocessed, _letterbox) = preprocess(&image).unwrap();

    assert!((preprocessed.data[0] - 1.0).abs() < 1e-6);
    let last = *preprocessed.data.last().unwrap();
    assert!((last - 1.0).abs() < 1e-6);
}

#[test]
fn test_preprocess_pads_with_gray() {
    // 320x640: top rows are padding, center rows are content
    let data = vec![255.0f32; 320 * 640 * 3];
    let image = Tensor::new(vec![320, 640, 3], data).unwrap();
    let (preprocessed, letterbox) = preprocess(&image).unwrap();

    // First output row is padding: 114/255
    assert!((preprocessed.data[0] - 114.0 / 255.0).abs() < 1e-6);

    // Row at pad_y is content: 1.0
    let content_idx = letterbox.pad_y as usize * 640;
    assert!((preprocessed.data[content_idx] - 1.0).abs() < 1e-6);
}

#[test]
fn test_preprocess_rejects_wrong_ndim() {
    let image = Tensor::zeros(vec![100, 100]).unwrap();
    assert!(preprocess(&image).is_err());
}

#[test]
fn test_preprocess_rejects_wrong_channels() {
    let image = Tensor::zeros(vec![100, 100, 4]).unwrap();
    assert!(preprocess(&image).is_err());
}

#[test]
fn test_preprocess_rejects_zero_dimensions() {
    let image = Tensor::new(vec![0, 640, 3], vec![]).unwrap();
    let result = preprocess(&image);
    assert!(result.is_err());
}
