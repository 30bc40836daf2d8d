use percept_base::Rect;

/// Number of classes in the COCO detection label set
pub const COCO_CLASS_COUNT: usize = 80;

/// COCO class id for "person"
pub const PERSON_CLASS_ID: usize = 0;

const COCO_CLASS_NAMES: [&str; COCO_CLASS_COUNT] = [
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "backpack",
    "umbrella",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// Look up the COCO class name for a class id
pub fn class_name(class_id: usize) -> Option<&'static str> {
    COCO_CLASS_NAMES.get(class_id).copied()
}

/// A detected object with bounding box, class, and confidence
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Bounding box in source-image pixel coordinates
    pub bbox: Rect<f32>,
    /// COCO class id
    pub class_id: usize,
    /// Confidence score for the detection
    pub confidence: f32,
}

impl Detection {
    /// Human-readable class label
    pub fn label(&self) -> &'static str {
        class_name(self.class_id).unwrap_or("unknown")
    }

    pub fn is_person(&self) -> bool {
        self.class_id == PERSON_CLASS_ID
    }
}

/// Letterbox transformation parameters for coordinate rescaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxInfo {
    /// Scale factor applied to the image (min(640/H, 640/W))
    pub scale: f32,
    /// Horizontal padding added (in pixels)
    pub pad_x: f32,
    /// Vertical padding added (in pixels)
    pub pad_y: f32,
}
