//! bootanim turns an animated GIF into an Android boot-animation archive.
//!
//! A boot animation is a zip holding a textual manifest (`desc.txt`) and a
//! folder of numbered PNG frames the device plays back at a fixed fps.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: GIF -> independent RGBA8 frames plus recovered timing
//!    ([`decode_animation`])
//! 2. **Compose**: each frame is optionally scaled to fit, then centered on a
//!    transparent canvas matching the device screen ([`compose_frame`])
//! 3. **Describe**: canvas size, fps, and the single `part0` playback part
//!    render to the descriptor text ([`Descriptor::render`])
//! 4. **Assemble**: descriptor plus zero-padded frame PNGs are written into
//!    the zip in order ([`BootArchive`])
//!
//! [`make_bootanimation`] wires the stages together; the build is
//! single-threaded and aborts on the first error.
#![forbid(unsafe_code)]

pub mod archive;
pub mod compose;
pub mod decode;
pub mod descriptor;
pub mod device;
pub mod error;
pub mod pipeline;

pub use archive::{ArchiveSummary, BootArchive, frame_entry_name, inspect, padding_width};
pub use compose::{compose_frame, encode_png};
pub use decode::{
    AnimationTiming, DecodedAnimation, decode_animation, fps_from_timing, open_animation,
};
pub use descriptor::{Descriptor, Part};
pub use device::{Canvas, DEVICES, resolve_dimensions};
pub use error::{BootanimError, BootanimResult};
pub use pipeline::{DEFAULT_OUTPUT, PART_FOLDER, make_bootanimation, resolve_out_path};
