use std::io::Cursor;

use anyhow::Context as _;
use image::{RgbaImage, imageops};

use crate::{
    device::Canvas,
    error::{BootanimError, BootanimResult},
};

/// Composite one decoded frame onto a canvas-sized transparent background.
///
/// With a fit percentage the frame is first resampled so its width covers
/// that fraction of the canvas width, height scaling by the same factor.
/// The (possibly scaled) frame is then centered; anything extending past
/// the canvas edges is clipped silently.
pub fn compose_frame(
    frame: &RgbaImage,
    canvas: Canvas,
    fit: Option<u32>,
) -> BootanimResult<RgbaImage> {
    let scaled;
    let image = match fit {
        Some(fit) => {
            let (width, height) = scaled_size(canvas, fit, frame.dimensions())?;
            scaled = imageops::resize(frame, width, height, imageops::FilterType::Lanczos3);
            &scaled
        }
        None => frame,
    };

    let mut background = RgbaImage::new(canvas.width, canvas.height);
    let x = centered_offset(canvas.width, image.width());
    let y = centered_offset(canvas.height, image.height());
    imageops::overlay(&mut background, image, x, y);
    Ok(background)
}

/// Target size for scale-to-fit: width is `fit` percent of the canvas
/// width (floored), height follows by the same ratio.
pub fn scaled_size(canvas: Canvas, fit: u32, (src_w, src_h): (u32, u32)) -> BootanimResult<(u32, u32)> {
    if fit == 0 {
        return Err(BootanimError::validation("fit percentage must be >= 1"));
    }
    let width = (u64::from(canvas.width) * u64::from(fit) / 100) as u32;
    if width == 0 {
        return Err(BootanimError::validation(
            "fit percentage scales the frame to zero width",
        ));
    }
    let factor = f64::from(width) / f64::from(src_w);
    let height = (f64::from(src_h) * factor).floor() as u32;
    Ok((width, height))
}

/// Centering offset of `inner` inside `outer`; negative when the image
/// overhangs the canvas.
pub fn centered_offset(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}

/// Encode a composited canvas as a lossless, alpha-preserving PNG.
pub fn encode_png(image: &RgbaImage) -> BootanimResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode png frame")?;
    Ok(bytes)
}
