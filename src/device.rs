use crate::error::{BootanimError, BootanimResult};

/// Target screen geometry in pixels. Both dimensions are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> BootanimResult<Self> {
        if width == 0 || height == 0 {
            return Err(BootanimError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Known devices, canonical uppercase name to screen geometry.
///
/// A closed table, extended by appending entries. Lookup is linear; the
/// table is expected to stay small.
pub const DEVICES: &[(&str, Canvas)] = &[(
    "MAKO",
    Canvas {
        width: 768,
        height: 1270,
    },
)];

/// Resolve a `DIMENSIONS` CLI argument into a canvas.
///
/// The argument is either a device name from [`DEVICES`] (matched
/// case-insensitively) or a literal pair like `768,1270` or `(768, 1270)`.
/// Returns the matched device name, or `"Unknown"` for literal pairs,
/// alongside the canvas.
pub fn resolve_dimensions(arg: &str) -> BootanimResult<(&'static str, Canvas)> {
    let upper = arg.to_ascii_uppercase();

    if let Some(&(name, canvas)) = DEVICES.iter().find(|(name, _)| *name == upper) {
        return Ok((name, canvas));
    }

    let bare: String = upper.chars().filter(|c| !"() ".contains(*c)).collect();
    let mut dims = [0u32; 2];
    let mut parts = bare.split(',');
    for slot in dims.iter_mut() {
        let piece = parts.next().unwrap_or("");
        *slot = piece.parse().map_err(|_| invalid_dimensions(arg))?;
    }
    if parts.next().is_some() {
        return Err(invalid_dimensions(arg));
    }

    let canvas = Canvas::new(dims[0], dims[1]).map_err(|_| invalid_dimensions(arg))?;
    Ok(("Unknown", canvas))
}

fn invalid_dimensions(arg: &str) -> BootanimError {
    BootanimError::validation(format!("invalid dimensions or device name ({arg})"))
}
