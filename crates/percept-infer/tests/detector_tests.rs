use percept_base::Tensor;
use percept_infer::{
    Backend, Detection, InferError, ModelSource, Session, YoloDetector, PERSON_CLASS_ID,
};
use std::collections::HashMap;

/// A session that returns a fixed [1, 84, N] output regardless of input.
struct MockSession {
    input_names: Vec<String>,
    output_names: Vec<String>,
    output: Tensor<f32>,
}

impl Session for MockSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        // The detector must hand us a preprocessed NCHW tensor
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].0, "images");
        assert_eq!(inputs[0].1.shape, vec![1, 3, 640, 640]);

        let mut outputs = HashMap::new();
        outputs.insert("output0".to_string(), self.output.clone());
        Ok(outputs)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

struct MockBackend {
    output: Tensor<f32>,
}

impl Backend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn load_model(&self, _model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        Ok(Box::new(MockSession {
            input_names: vec!["images".to_string()],
            output_names: vec!["output0".to_string()],
            output: self.output.clone(),
        }))
    }
}

/// One person detection at model-space (cx, cy) with a 100x100 box.
fn single_person_output(cx: f32, cy: f32, score: f32) -> Tensor<f32> {
    let mut data = vec![0.0f32; 84];
    data[0] = cx;
    data[1] = cy;
    data[2] = 100.0;
    data[3] = 100.0;
    data[4 + PERSON_CLASS_ID] = score;
    Tensor::new(vec![1, 84, 1], data).unwrap()
}

#[test]
fn test_detect_maps_model_output_to_source_coordinates() {
    let backend = MockBackend {
        output: single_person_output(320.0, 320.0, 0.9),
    };
    let mut detector = YoloDetector::new(ModelSource::Memory(vec![]), &backend).unwrap();

    // 640x640 source: identity letterbox
    let image = Tensor::new(vec![640, 640, 3], vec![128.0f32; 640 * 640 * 3]).unwrap();
    let detections: Vec<Detection> = detector.detect(&image).unwrap();

    assert_eq!(detections.len(), 1);
    let det = &detections[0];
    assert!(det.is_person());
    assert!((det.confidence - 0.9).abs() < 0.01);
    assert!((det.bbox.origin.x - 270.0).abs() < 0.01);
    assert!((det.bbox.origin.y - 270.0).abs() < 0.01);
    assert!((det.bbox.size.x - 100.0).abs() < 0.01);
}

#[test]
fn test_detect_applies_confidence_threshold() {
    let backend = MockBackend {
        output: single_person_output(320.0, 320.0, 0.2),
    };
    let mut detector = YoloDetector::new(ModelSource::Memory(vec![]), &backend).unwrap();

    let image = Tensor::new(vec![640, 640, 3], vec![0.0f32; 640 * 640 * 3]).unwrap();
    let detections = detector.detect(&image).unwrap();
    assert!(detections.is_empty());

    // Lowering the threshold lets the same detection through
    let backend = MockBackend {
        output: single_person_output(320.0, 320.0, 0.2),
    };
    let mut detector = YoloDetector::new(ModelSource::Memory(vec![]), &backend)
        .unwrap()
        .with_thresholds(0.1, 0.45);
    let image = Tensor::new(vec![640, 640, 3], vec![0.0f32; 640 * 640 * 3]).unwrap();
    let detections = detector.detect(&image).unwrap();
    assert_eq!(detections.len(), 1);
}

#[test]
fn test_detect_class_filter_drops_other_classes() {
    // A confident car detection
    let mut data = vec![0.0f32; 84];
    data[0] = 320.0;
    data[1] = 320.0;
    data[2] = 100.0;
    data[3] = 100.0;
    data[4 + 2] = 0.9;
    let backend = MockBackend {
        output: Tensor::new(vec![1, 84, 1], data).unwrap(),
    };

    let mut detector = YoloDetector::new(ModelSource::Memory(vec![]), &backend)
        .unwrap()
        .with_class_filter(PERSON_CLASS_ID);

    let image = Tensor::new(vec![640, 640, 3], vec![0.0f32; 640 * 640 * 3]).unwrap();
    let detections = detector.detect(&image).unwrap();
    assert!(detections.is_empty());
}

#[test]
fn test_detect_rejects_bad_input_shape() {
    let backend = MockBackend {
        output: single_person_output(320.0, 320.0, 0.9),
    };
    let mut detector = YoloDetector::new(ModelSource::Memory(vec![]), &backend).unwrap();

    let image = Tensor::new(vec![100, 100], vec![0.0f32; 10000]).unwrap();
    assert!(detector.detect(&image).is_err());
}
