use crate::InferError;
use percept_base::Tensor;

use super::postprocess::postprocess;
use super::preprocess::preprocess;
use super::types::Detection;

/// End-to-end YOLO object detection pipeline
///
/// Integrates preprocessing, ONNX inference, and post-processing into a single
/// `detect()` call. Handles letterbox resize, model inference, NMS, and
/// coordinate rescaling automatically.
pub struct YoloDetector {
    session: Box<dyn crate::Session>,
    conf_threshold: f32,
    nms_threshold: f32,
    class_filter: Option<usize>,
}

impl YoloDetector {
    /// Create a new YOLO detector
    ///
    /// # Arguments
    /// * `model` - Model source (file path or in-memory bytes)
    /// * `backend` - Backend to use for inference (e.g. `OnnxBackend`)
    ///
    /// # Returns
    /// Detector with default thresholds (conf=0.25, nms=0.45) and no class
    /// filter.
    pub fn new(
        model: crate::ModelSource,
        backend: &dyn crate::Backend,
    ) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;

        Ok(Self {
            session,
            conf_threshold: 0.25,
            nms_threshold: 0.45,
            class_filter: None,
        })
    }

    /// Set confidence and NMS thresholds (builder pattern)
    pub fn with_thresholds(mut self, conf: f32, nms: f32) -> Self {
        self.conf_threshold = conf;
        self.nms_threshold = nms;
        self
    }

    /// Keep only detections of the given class (builder pattern)
    pub fn with_class_filter(mut self, class_id: usize) -> Self {
        self.class_filter = Some(class_id);
        self
    }

    /// Get current confidence threshold
    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    /// Run object detection on an image
    ///
    /// # Arguments
    /// * `image` - Input image as Tensor<f32> with shape [H, W, 3] and values in [0, 255]
    ///
    /// # Returns
    /// Vector of detections sorted by confidence descending
    pub fn detect(&mut self, image: &Tensor<f32>) -> Result<Vec<Detection>, InferError> {
        // Preprocess (validates the input shape)
        let (preprocessed, letterbox) = preprocess(image)?;

        // Run inference
        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no inputs".to_string()))?
            .clone();

        let outputs = self.session.run(&[(input_name.as_str(), preprocessed)])?;

        // Extract output tensor
        let output = outputs
            .values()
            .next()
            .ok_or_else(|| InferError::BackendError("model produced no outputs".to_string()))?;

        // Post-process
        let detections = postprocess(
            output,
            &letterbox,
            self.conf_threshold,
            self.nms_threshold,
            self.class_filter,
        )?;

        Ok(detections)
    }
}
