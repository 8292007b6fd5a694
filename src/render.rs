//! PNG output for a laid-out box collection.

use std::path::Path;

use image::{Rgb, RgbImage};
use log::debug;

use crate::layout::BoxCollection;
use crate::palette::{Color, Palette};

/// Error produced while rendering or writing an image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The collection has a zero-sized bounding box.
    #[error("nothing to render: canvas is {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    /// Encoding or writing the image failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

const fn pixel(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

/// Paint `boxes` onto a canvas of their bounding size.
///
/// The background goes down first, then every box in order.
/// Delimiter boxes only cover the lower half of their row.
#[must_use]
pub fn render(boxes: &BoxCollection, palette: &Palette) -> RgbImage {
    let (width, height) = boxes.dimension();
    let mut image = RgbImage::from_pixel(width, height, pixel(palette.background()));

    for token_box in boxes {
        let (x, y, w, h) = token_box.paint_area();
        let color = pixel(token_box.color);
        let right = x.saturating_add(w).min(width);
        let bottom = y.saturating_add(h).min(height);
        for py in y..bottom {
            for px in x..right {
                image.put_pixel(px, py, color);
            }
        }
    }

    image
}

/// Render `boxes` and write the result as a PNG file.
///
/// # Errors
///
/// Returns `RenderError::EmptyCanvas` when there is nothing to draw,
/// or `RenderError::Image` when encoding or writing fails.
pub fn save_png(
    boxes: &BoxCollection,
    palette: &Palette,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let (width, height) = boxes.dimension();
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyCanvas { width, height });
    }

    let path = path.as_ref();
    render(boxes, palette).save_with_format(path, image::ImageFormat::Png)?;
    debug!("wrote {width}x{height} image to {}", path.display());
    Ok(())
}
