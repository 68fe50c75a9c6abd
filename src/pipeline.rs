use std::path::{Path, PathBuf};

use crate::{
    archive::{self, BootArchive},
    compose::{compose_frame, encode_png},
    decode::{fps_from_timing, open_animation},
    descriptor::{Descriptor, Part},
    device::Canvas,
    error::BootanimResult,
};

/// Output name used when the caller gives none.
pub const DEFAULT_OUTPUT: &str = "bootanimation";

/// Folder holding the single animation part.
pub const PART_FOLDER: &str = "part0";

/// Resolve the output path, appending `.zip` when absent.
pub fn resolve_out_path(out: Option<&Path>) -> PathBuf {
    let out = out.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT));
    match out.extension() {
        Some(ext) if ext == "zip" => out.to_path_buf(),
        _ => {
            let mut with_ext = out.as_os_str().to_os_string();
            with_ext.push(".zip");
            PathBuf::from(with_ext)
        }
    }
}

/// Build a boot-animation archive from an animated GIF.
///
/// Decodes the input, derives fps from recovered timing unless overridden,
/// writes the descriptor and every composited frame under `part0/`, and
/// finalizes the zip. The first failure aborts the build; an incomplete
/// file may remain on disk. Returns the resolved output path.
#[tracing::instrument(skip_all, fields(input = %input.display()))]
pub fn make_bootanimation(
    canvas: Canvas,
    input: &Path,
    out: Option<&Path>,
    fps: Option<u32>,
    fit: Option<u32>,
) -> BootanimResult<PathBuf> {
    let out_path = resolve_out_path(out);
    let mut archive = BootArchive::create(&out_path)?;

    let animation = open_animation(input)?;
    let fps = match fps {
        Some(fps) => fps,
        None => fps_from_timing(animation.timing)?,
    };
    tracing::debug!(
        frames = animation.timing.frame_count,
        avg_ms = animation.timing.average_duration_ms,
        fps,
        "decoded input"
    );

    let descriptor = Descriptor {
        width: canvas.width,
        height: canvas.height,
        fps,
        parts: vec![Part::new(0, 0, PART_FOLDER)],
    };
    archive.write_descriptor(&descriptor.render())?;

    let padding = archive::padding_width(animation.frames.len());
    for (index, frame) in animation.frames.iter().enumerate() {
        let composited = compose_frame(frame, canvas, fit)?;
        let bytes = encode_png(&composited)?;
        archive.write_frame(
            &archive::frame_entry_name(PART_FOLDER, index, padding),
            &bytes,
        )?;
    }

    archive.finish()?;
    tracing::info!(out = %out_path.display(), "boot animation written");
    Ok(out_path)
}
