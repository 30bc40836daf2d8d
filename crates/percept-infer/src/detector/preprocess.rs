use crate::InferError;
use percept_base::Tensor;

use super::types::LetterboxInfo;

const TARGET_SIZE: usize = 640;
const PAD_COLOR: f32 = 114.0 / 255.0; // Gray padding in normalized range

/// Preprocess an image for YOLO inference
///
/// Takes an image tensor in HWC format (height, width, 3 channels) with pixel
/// values in [0, 255] and returns a preprocessed tensor in NCHW format
/// (1, 3, 640, 640) with values in [0.0, 1.0].
///
/// The preprocessing includes:
/// - Letterbox resize to 640x640 maintaining aspect ratio
/// - HWC -> NCHW transpose
/// - Rescale from [0, 255] to [0.0, 1.0]
///
/// Resizing uses nearest-neighbor interpolation; padding is YOLO's standard
/// gray (114).
///
/// Returns the preprocessed tensor and letterbox info for coordinate rescaling.
pub fn preprocess(image: &Tensor<f32>) -> Result<(Tensor<f32>, LetterboxInfo), InferError> {
    // Validate input shape
    if image.shape.len() != 3 {
        return Err(InferError::ShapeMismatch {
            expected: "[H, W, 3]".to_string(),
            got: format!("{:?}", image.shape),
        });
    }
    let [h, w, c] = [image.shape[0], image.shape[1], image.shape[2]];
    if c != 3 {
        return Err(InferError::ShapeMismatch {
            expected: "3 channels".to_string(),
            got: format!("{} channels", c),
        });
    }
    if h == 0 || w == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-zero dimensions".to_string(),
            got: format!("{}x{}", h, w),
        });
    }

    // Compute scale factor (min of width_scale, height_scale)
    let scale = (TARGET_SIZE as f32 / w as f32).min(TARGET_SIZE as f32 / h as f32);

    // Content dimensions after scaling
    let new_w = (w as f32 * scale) as usize;
    let new_h = (h as f32 * scale) as usize;

    // Padding on each side to center the content
    let pad_x = ((TARGET_SIZE - new_w) / 2) as f32;
    let pad_y = ((TARGET_SIZE - new_h) / 2) as f32;
    let pad_x_int = pad_x as usize;
    let pad_y_int = pad_y as usize;

    // Single pass over the output: pad color outside the content region,
    // nearest-neighbor sample inside it, normalized to [0, 1].
    // Output layout is NCHW: [1, 3, 640, 640].
    let mut nchw_data = vec![PAD_COLOR; 3 * TARGET_SIZE * TARGET_SIZE];

    for ch in 0..3 {
        let plane = ch * TARGET_SIZE * TARGET_SIZE;
        for out_y in 0..new_h {
            let src_y = ((out_y as f32 / scale).floor() as usize).min(h - 1);
            let row = plane + (out_y + pad_y_int) * TARGET_SIZE + pad_x_int;
            for out_x in 0..new_w {
                let src_x = ((out_x as f32 / scale).floor() as usize).min(w - 1);
                let src_idx = (src_y * w + src_x) * 3 + ch;
                nchw_data[row + out_x] = image.data[src_idx] / 255.0;
            }
        }
    }

    let preprocessed = Tensor::new(vec![1, 3, TARGET_SIZE, TARGET_SIZE], nchw_data)
        .map_err(|e| InferError::BackendError(format!("failed to create tensor: {}", e)))?;

    let letterbox = LetterboxInfo {
        scale,
        pad_x,
        pad_y,
    };

    Ok((preprocessed, letterbox))
}
