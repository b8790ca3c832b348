use nokhwa::{
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType},
    Camera,
};

use super::CaptureDevice;
use crate::error::EditError;
use crate::picture::Picture;

/// A system camera reached through nokhwa's native backend.
#[derive(Default)]
pub struct NativeCamera {
    camera: Option<Camera>,
}

impl NativeCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.camera.is_some()
    }
}

impl CaptureDevice for NativeCamera {
    fn acquire(&mut self, index: u32) -> Result<(), EditError> {
        self.release();

        let format = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(index), format)
            .map_err(|e| EditError::DeviceUnavailable(e.to_string()))?;

        camera
            .open_stream()
            .map_err(|e| EditError::DeviceUnavailable(e.to_string()))?;

        self.camera = Some(camera);
        Ok(())
    }

    fn grab_frame(&mut self) -> Result<Option<Picture>, EditError> {
        let Some(camera) = self.camera.as_mut() else {
            return Err(EditError::DeviceUnavailable(
                "camera not acquired".to_string(),
            ));
        };

        let buffer = match camera.frame() {
            Ok(buffer) => buffer,
            Err(e) => {
                log::warn!("camera frame read failed: {e}");
                return Ok(None);
            }
        };

        match buffer.decode_image::<RgbFormat>() {
            Ok(rgb) => Ok(Some(Picture::from_rgb_image(rgb))),
            Err(e) => {
                log::warn!("camera frame decode failed: {e}");
                Ok(None)
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            if let Err(e) = camera.stop_stream() {
                log::warn!("camera stop failed: {e}");
            }
        }
    }
}

impl Drop for NativeCamera {
    fn drop(&mut self) {
        self.release();
    }
}
