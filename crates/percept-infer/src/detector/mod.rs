mod postprocess;
mod preprocess;
mod types;
mod yolo;

pub use postprocess::{iou, postprocess};
pub use preprocess::preprocess;
pub use types::{class_name, Detection, LetterboxInfo, COCO_CLASS_COUNT, PERSON_CLASS_ID};
pub use yolo::YoloDetector;
