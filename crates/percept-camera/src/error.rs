use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// Device open or configuration failure.
    Device(String),
    /// Failure while streaming frames.
    Stream(String),
    /// Frame channel failure (capture thread gone).
    Channel(String),
    /// Frame decode failure.
    Decode(percept_image::ImageError),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<percept_image::ImageError> for CameraError {
    fn from(err: percept_image::ImageError) -> Self {
        CameraError::Decode(err)
    }
}

impl From<percept_base::TensorError> for CameraError {
    fn from(err: percept_base::TensorError) -> Self {
        CameraError::Stream(err.to_string())
    }
}
