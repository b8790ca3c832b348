//! Loading pictures from files and byte buffers.
//!
//! Any format the `image` crate was built with is accepted (PNG and JPEG by
//! default). EXIF orientation is applied so the picture is upright.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use crate::error::EditError;
use crate::picture::Picture;

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90CW,
    Transverse,
    Rotate270CW,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `EditError::InvalidSource` if the file cannot be read or its
/// contents are not a decodable image.
pub fn load_file(path: impl AsRef<Path>) -> Result<Picture, EditError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| EditError::InvalidSource(format!("{}: {e}", path.display())))?;
    let picture = load_bytes(&bytes)?;
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        picture.width,
        picture.height
    );
    Ok(picture)
}

/// Decode an in-memory image, applying EXIF orientation when present.
pub fn load_bytes(bytes: &[u8]) -> Result<Picture, EditError> {
    if bytes.is_empty() {
        return Err(EditError::InvalidSource("empty input".to_string()));
    }

    let orientation = extract_orientation(bytes);

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EditError::InvalidSource(e.to_string()))?
        .decode()?;

    let rgb = apply_orientation(img, orientation).into_rgb8();
    let picture = Picture::from_rgb_image(rgb);
    if picture.is_empty() {
        return Err(EditError::InvalidSource("image has no pixels".to_string()));
    }
    Ok(picture)
}

/// Orientation recorded in the EXIF block, `Normal` when absent.
pub fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
