//! ONNX-backed object detection for the perception module.
//!
//! The model runtime is external (ONNX Runtime via `ort`); this crate owns
//! session plumbing and the YOLO detector pipeline around it.

pub mod backend;
pub mod backends;
pub mod detector;
pub mod device;
pub mod error;
pub mod modelsource;
pub mod session;

pub use backend::Backend;
pub use backends::OnnxBackend;
pub use detector::{
    class_name, iou, postprocess, preprocess, Detection, LetterboxInfo, YoloDetector,
    COCO_CLASS_COUNT, PERSON_CLASS_ID,
};
pub use device::Device;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use session::Session;
