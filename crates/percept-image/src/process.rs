use crate::ImageError;
use percept_base::Tensor;

/// A single frame-processing operation over an RGB frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOp {
    /// BT.601 luma, written back to all three channels.
    Grayscale,
    /// Mean filter over a `(2*radius+1)` square window, edge-clamped.
    BoxBlur { radius: usize },
    /// Saturating per-channel brightness adjustment.
    Brightness { delta: i16 },
}

/// An ordered chain of frame operations applied in place.
///
/// Frames must be HWC `Tensor<u8>` with 3 channels (RGB).
#[derive(Debug, Clone, Default)]
pub struct FrameProcessor {
    ops: Vec<FrameOp>,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation to the chain.
    pub fn with_op(mut self, op: FrameOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn ops(&self) -> &[FrameOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Parse a processor chain from a comma-separated spec string.
    ///
    /// Recognized ops: `grayscale`, `blur` / `blur:<radius>`,
    /// `brightness:<delta>`. Empty segments are ignored, so `""` yields an
    /// empty (identity) processor.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Process` for unknown op names or unparsable
    /// arguments.
    pub fn parse(spec: &str) -> Result<Self, ImageError> {
        let mut processor = Self::new();

        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (name, arg) = match part.split_once(':') {
                Some((name, arg)) => (name, Some(arg)),
                None => (part, None),
            };

            let op = match name {
                "grayscale" => FrameOp::Grayscale,
                "blur" => {
                    let radius = match arg {
                        Some(arg) => arg.parse::<usize>().map_err(|e| {
                            ImageError::Process(format!("invalid blur radius '{arg}': {e}"))
                        })?,
                        None => 1,
                    };
                    FrameOp::BoxBlur { radius }
                }
                "brightness" => {
                    let arg = arg.ok_or_else(|| {
                        ImageError::Process("brightness requires a delta, e.g. brightness:-20".to_string())
                    })?;
                    let delta = arg.parse::<i16>().map_err(|e| {
                        ImageError::Process(format!("invalid brightness delta '{arg}': {e}"))
                    })?;
                    FrameOp::Brightness { delta }
                }
                other => {
                    return Err(ImageError::Process(format!("unknown frame op '{other}'")));
                }
            };

            processor.ops.push(op);
        }

        Ok(processor)
    }

    /// Apply the op chain to a frame, in order, in place.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Process` if the frame is not an HWC RGB tensor.
    pub fn process(&self, frame: &mut Tensor<u8>) -> Result<(), ImageError> {
        let (h, w) = check_rgb_shape(frame)?;

        for op in &self.ops {
            match *op {
                FrameOp::Grayscale => grayscale(&mut frame.data),
                FrameOp::BoxBlur { radius } => box_blur(&mut frame.data, w, h, radius),
                FrameOp::Brightness { delta } => brightness(&mut frame.data, delta),
            }
        }

        Ok(())
    }
}

fn check_rgb_shape(frame: &Tensor<u8>) -> Result<(usize, usize), ImageError> {
    if frame.shape.len() != 3 || frame.shape[2] != 3 {
        return Err(ImageError::Process(format!(
            "expected [H, W, 3] frame, got shape {:?}",
            frame.shape
        )));
    }
    Ok((frame.shape[0], frame.shape[1]))
}

/// Replace each RGB pixel with its BT.601 luma.
fn grayscale(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(3) {
        let r = pixel[0] as f32;
        let g = pixel[1] as f32;
        let b = pixel[2] as f32;
        let y = (0.299 * r + 0.587 * g + 0.114 * b).clamp(0.0, 255.0) as u8;
        pixel[0] = y;
        pixel[1] = y;
        pixel[2] = y;
    }
}

/// Mean filter over a square window, clamping the window at image edges.
fn box_blur(data: &mut [u8], width: usize, height: usize, radius: usize) {
    if radius == 0 || width == 0 || height == 0 {
        return;
    }

    let src = data.to_vec();
    let r = radius as isize;

    for y in 0..height as isize {
        for x in 0..width as isize {
            let y0 = (y - r).max(0);
            let y1 = (y + r).min(height as isize - 1);
            let x0 = (x - r).max(0);
            let x1 = (x + r).min(width as isize - 1);
            let count = ((y1 - y0 + 1) * (x1 - x0 + 1)) as u32;

            let mut sum = [0u32; 3];
            for sy in y0..=y1 {
                for sx in x0..=x1 {
                    let idx = (sy as usize * width + sx as usize) * 3;
                    sum[0] += src[idx] as u32;
                    sum[1] += src[idx + 1] as u32;
                    sum[2] += src[idx + 2] as u32;
                }
            }

            let idx = (y as usize * width + x as usize) * 3;
            data[idx] = (sum[0] / count) as u8;
            data[idx + 1] = (sum[1] / count) as u8;
            data[idx + 2] = (sum[2] / count) as u8;
        }
    }
}

/// Saturating brightness shift on every channel.
fn brightness(data: &mut [u8], delta: i16) {
    for v in data.iter_mut() {
        *v = (*v as i16 + delta).clamp(0, 255) as u8;
    }
}
