use crate::InferError;
use percept_base::{Rect, Tensor, Vec2};

use super::types::{Detection, LetterboxInfo, COCO_CLASS_COUNT};

/// Rows per detection column: 4 box coordinates + per-class scores
const FEATURES: usize = 4 + COCO_CLASS_COUNT;

/// Compute Intersection over Union (IoU) between two bounding boxes
///
/// Returns 0.0 for non-overlapping boxes or zero-area boxes (no division by zero).
pub fn iou(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    // Check for zero-area boxes
    if a.size.x <= 0.0 || a.size.y <= 0.0 || b.size.x <= 0.0 || b.size.y <= 0.0 {
        return 0.0;
    }

    // Compute intersection area
    let intersection = a.intersection(*b);
    let intersection_area = match intersection {
        Some(rect) => rect.size.x * rect.size.y,
        None => 0.0,
    };

    // Compute union area
    let area_a = a.size.x * a.size.y;
    let area_b = b.size.x * b.size.y;
    let union_area = area_a + area_b - intersection_area;

    // Avoid division by zero
    if union_area <= 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Post-process YOLO detect-head output
///
/// Takes the raw model output tensor [1, 84, N] (4 box coordinates plus 80
/// COCO class scores per column), applies class argmax, confidence filtering,
/// an optional single-class filter, class-aware NMS, and coordinate rescaling
/// to produce final detections.
///
/// # Arguments
/// * `output` - Raw model output tensor with shape [1, 84, N]
/// * `letterbox` - Letterbox parameters for coordinate rescaling
/// * `conf_threshold` - Minimum confidence threshold (default: 0.25)
/// * `iou_threshold` - IoU threshold for NMS (default: 0.45)
/// * `class_filter` - If set, keep only detections of this class
///
/// # Returns
/// Vector of `Detection` sorted by confidence descending, or
/// `InferError::ShapeMismatch` if the output tensor has an unexpected shape.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &LetterboxInfo,
    conf_threshold: f32,
    iou_threshold: f32,
    class_filter: Option<usize>,
) -> Result<Vec<Detection>, InferError> {
    // Validate output shape
    if output.shape.len() != 3 || output.shape[0] != 1 || output.shape[1] != FEATURES {
        return Err(InferError::ShapeMismatch {
            expected: format!("[1, {}, N]", FEATURES),
            got: format!("{:?}", output.shape),
        });
    }

    let n = output.shape[2];
    if n == 0 {
        return Ok(Vec::new());
    }

    // In the flat data, element at [0, row, col] is at index: row * N + col
    let mut candidates: Vec<Detection> = Vec::new();

    for i in 0..n {
        let cx = output.data[i];
        let cy = output.data[n + i];
        let w = output.data[2 * n + i];
        let h = output.data[3 * n + i];

        // Class argmax over the score rows
        let mut class_id = 0;
        let mut confidence = f32::NEG_INFINITY;
        for cls in 0..COCO_CLASS_COUNT {
            let score = output.data[(4 + cls) * n + i];
            if score > confidence {
                confidence = score;
                class_id = cls;
            }
        }

        if confidence < conf_threshold {
            continue;
        }
        if let Some(wanted) = class_filter {
            if class_id != wanted {
                continue;
            }
        }

        // Rescale from model space back to the source image
        let rescaled_cx = (cx - letterbox.pad_x) / letterbox.scale;
        let rescaled_cy = (cy - letterbox.pad_y) / letterbox.scale;
        let rescaled_w = w / letterbox.scale;
        let rescaled_h = h / letterbox.scale;

        // Convert from center to top-left origin
        let origin_x = rescaled_cx - rescaled_w / 2.0;
        let origin_y = rescaled_cy - rescaled_h / 2.0;

        candidates.push(Detection {
            bbox: Rect::new(
                Vec2::new(origin_x, origin_y),
                Vec2::new(rescaled_w, rescaled_h),
            ),
            class_id,
            confidence,
        });
    }

    // Sort by confidence descending
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Greedy NMS; suppression is class-aware (boxes of different classes
    // never suppress each other)
    let mut keep = Vec::new();
    let mut suppressed = vec![false; candidates.len()];

    for i in 0..candidates.len() {
        if suppressed[i] {
            continue;
        }

        keep.push(candidates[i].clone());

        for j in (i + 1)..candidates.len() {
            if suppressed[j] || candidates[j].class_id != candidates[i].class_id {
                continue;
            }

            let iou_val = iou(&candidates[i].bbox, &candidates[j].bbox);
            if iou_val > iou_threshold {
                suppressed[j] = true;
            }
        }
    }

    Ok(keep)
}
