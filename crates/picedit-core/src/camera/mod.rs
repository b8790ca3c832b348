//! Single-frame camera capture with scoped device ownership.
//!
//! A capture opens the device, reads one frame and releases the device.
//! Release is tied to a guard's `Drop`, so it runs on success, on a missing
//! frame, on error and while unwinding from a panic.

#[cfg(feature = "webcam")]
mod native;

#[cfg(feature = "webcam")]
pub use native::NativeCamera;

use crate::error::EditError;
use crate::picture::Picture;

/// A device that can produce still frames.
pub trait CaptureDevice {
    /// Open the device at `index` for exclusive use.
    ///
    /// Fails with `EditError::DeviceUnavailable` when the device is missing,
    /// busy or access is denied.
    fn acquire(&mut self, index: u32) -> Result<(), EditError>;

    /// Read one frame from the acquired device. `Ok(None)` means the device
    /// is open but has nothing to deliver.
    fn grab_frame(&mut self) -> Result<Option<Picture>, EditError>;

    /// Give the device back. Must be safe to call more than once.
    fn release(&mut self);
}

/// Releases the wrapped device when dropped.
struct Acquired<'a, D: CaptureDevice + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: CaptureDevice + ?Sized> Acquired<'a, D> {
    fn open(device: &'a mut D, index: u32) -> Result<Self, EditError> {
        device.acquire(index)?;
        log::debug!("camera {index} acquired");
        Ok(Self { device })
    }
}

impl<D: CaptureDevice + ?Sized> Drop for Acquired<'_, D> {
    fn drop(&mut self) {
        self.device.release();
        log::debug!("camera released");
    }
}

/// Acquire the device at `index`, take one frame and release the device.
///
/// # Errors
///
/// - `EditError::DeviceUnavailable` if the device cannot be opened
/// - `EditError::DeviceNoFrame` if it opened but produced no usable frame
pub fn capture_frame<D: CaptureDevice + ?Sized>(
    device: &mut D,
    index: u32,
) -> Result<Picture, EditError> {
    let session = Acquired::open(device, index)?;

    match session.device.grab_frame()? {
        Some(frame) if !frame.is_empty() => {
            log::info!("captured {}x{} frame", frame.width, frame.height);
            Ok(frame)
        }
        _ => {
            log::warn!("camera {index} opened but returned no frame");
            Err(EditError::DeviceNoFrame)
        }
    }
}

/// Stand-in used when no camera backend is compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCaptureDevice;

impl CaptureDevice for NoCaptureDevice {
    fn acquire(&mut self, _index: u32) -> Result<(), EditError> {
        Err(EditError::DeviceUnavailable(
            "camera support is not enabled in this build".to_string(),
        ))
    }

    fn grab_frame(&mut self) -> Result<Option<Picture>, EditError> {
        Ok(None)
    }

    fn release(&mut self) {}
}

/// A scripted device for tests: serves canned frames and counts
/// acquisitions and releases.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Default)]
pub struct FakeCamera {
    /// Whether `acquire` succeeds.
    pub available: bool,
    /// Frame handed out by the next `grab_frame`.
    pub frame: Option<Picture>,
    /// Make `grab_frame` fail with this message.
    pub fail_grab: Option<String>,
    pub acquired: usize,
    pub released: usize,
    open: bool,
}

#[cfg(any(test, feature = "testing"))]
impl FakeCamera {
    /// An available camera that returns `frame`.
    pub fn with_frame(frame: Picture) -> Self {
        Self {
            available: true,
            frame: Some(frame),
            ..Self::default()
        }
    }

    /// A camera that opens but never delivers a frame.
    pub fn blank() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// A camera that cannot be opened.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(any(test, feature = "testing"))]
impl CaptureDevice for FakeCamera {
    fn acquire(&mut self, index: u32) -> Result<(), EditError> {
        if !self.available {
            return Err(EditError::DeviceUnavailable(format!("no camera at index {index}")));
        }
        self.acquired += 1;
        self.open = true;
        Ok(())
    }

    fn grab_frame(&mut self) -> Result<Option<Picture>, EditError> {
        if let Some(msg) = &self.fail_grab {
            return Err(EditError::DeviceUnavailable(msg.clone()));
        }
        Ok(self.frame.clone())
    }

    fn release(&mut self) {
        if self.open {
            self.released += 1;
            self.open = false;
        }
    }
}
