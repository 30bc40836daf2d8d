use crate::convert::yuyv_to_rgb;
use crate::{Camera, CameraConfig, CameraError};
use percept_base::Tensor;
use percept_image::DecodedImage;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

/// Pixel format negotiated during camera initialization.
#[derive(Debug, Clone, Copy)]
enum CaptureFormat {
    Mjpeg,
    Yuyv { width: u32, height: u32 },
}

/// V4L2 camera implementation.
pub struct V4l2Camera {
    config: CameraConfig,
    format: CaptureFormat,
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("format", &self.format)
            .field("device", &"<v4l::Device>")
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        // Ensure capture thread is running
        self.ensure_started()?;

        // Receive next frame from channel
        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("Receiver not initialized".to_string()))?;

        receiver.recv().await.ok_or_else(|| {
            CameraError::Stream(
                "Capture thread terminated; recreate V4l2Camera to restart".to_string(),
            )
        })?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Drop the receiver to signal the thread to stop
        drop(self.receiver.take());

        // Wait for the thread to finish
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Create a new V4L2 camera with the given configuration.
    ///
    /// Opens the device at `config.device()` and negotiates the pixel format:
    /// tries MJPEG first, falls back to YUYV if the device refuses MJPEG.
    /// Also configures the frame rate.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if:
    /// - The device cannot be opened
    /// - Neither MJPEG nor YUYV formats are supported
    /// - Format or parameter setting fails
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        // Open V4L2 device
        let device = Device::with_path(config.device())?;

        // Try MJPEG at the requested resolution
        let mut format = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        format = Capture::set_format(&device, &format)?;

        let capture_format = if format.fourcc == FourCC::new(b"MJPG") {
            CaptureFormat::Mjpeg
        } else {
            // Device refused MJPEG (it may substitute a different format);
            // fall back to raw YUYV
            log::warn!(
                "{}: MJPEG not supported, falling back to YUYV",
                config.device()
            );
            let mut format = Format::new(config.width(), config.height(), FourCC::new(b"YUYV"));
            format = Capture::set_format(&device, &format)?;
            if format.fourcc != FourCC::new(b"YUYV") {
                return Err(CameraError::Device(
                    "neither MJPEG nor YUYV format supported by device".to_string(),
                ));
            }
            // The device may adjust the resolution; capture at what it granted
            CaptureFormat::Yuyv {
                width: format.width,
                height: format.height,
            }
        };

        // Set frame rate
        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        v4l::video::Capture::set_params(&device, &params)?;

        Ok(Self {
            config,
            format: capture_format,
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread if not already running.
    ///
    /// This is called automatically on the first `recv()` call.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        // Take ownership of the device
        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("Device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count() as usize;
        let format = self.format;
        let (tx, rx) = mpsc::channel(buffer_count);

        // Spawn capture thread
        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, format, tx, buffer_count) {
                log::error!("Capture thread error: {}", e);
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background thread capture loop.
    ///
    /// Reads frames from V4L2, decodes them to RGB tensors, and sends them
    /// through the channel. Exits when the receiver is dropped.
    fn capture_loop(
        device: Device,
        format: CaptureFormat,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
    ) -> Result<(), CameraError> {
        // Create mmap stream
        let mut stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)?;

        loop {
            // Get next frame
            let (frame_data, _metadata) = CaptureStream::next(&mut stream)?;

            // Copy frame data (buffer is borrowed and only valid until next call)
            let frame_vec = frame_data.to_vec();

            let tensor = Self::decode_frame(&frame_vec, format)?;

            // Send frame through channel (blocking if full)
            if tx.blocking_send(Ok(tensor)).is_err() {
                // Receiver dropped - exit thread
                break;
            }
        }

        Ok(())
    }

    /// Decode a raw capture buffer to an HWC RGB tensor.
    fn decode_frame(data: &[u8], format: CaptureFormat) -> Result<Tensor<u8>, CameraError> {
        match format {
            CaptureFormat::Mjpeg => {
                let decoded = percept_image::decode_image(data)?;
                match decoded {
                    DecodedImage::U8(t) => Ok(t),
                    DecodedImage::U16(_) | DecodedImage::F32(_) => {
                        Err(CameraError::Decode(percept_image::ImageError::Decode(
                            "Unexpected pixel format (expected U8)".to_string(),
                        )))
                    }
                }
            }
            CaptureFormat::Yuyv { width, height } => {
                let rgb = yuyv_to_rgb(data, width, height).ok_or_else(|| {
                    CameraError::Stream(format!(
                        "short YUYV frame: {} bytes for {}x{}",
                        data.len(),
                        width,
                        height
                    ))
                })?;
                Ok(Tensor::new(
                    vec![height as usize, width as usize, 3],
                    rgb,
                )?)
            }
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}
