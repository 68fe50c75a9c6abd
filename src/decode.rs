use std::{fs::File, io::BufReader, path::Path};

use image::{AnimationDecoder, RgbaImage, codecs::gif::GifDecoder};

use crate::error::{BootanimError, BootanimResult};

/// Timing aggregate recovered from an animated input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    pub frame_count: usize,
    pub total_duration_ms: f64,
    pub average_duration_ms: f64,
}

impl AnimationTiming {
    /// Aggregate per-frame durations. Fails on a zero-frame animation so
    /// the average is never a division by zero.
    pub fn new(frame_count: usize, total_duration_ms: f64) -> BootanimResult<Self> {
        if frame_count == 0 {
            return Err(BootanimError::decode("animation contains no frames"));
        }
        Ok(Self {
            frame_count,
            total_duration_ms,
            average_duration_ms: total_duration_ms / frame_count as f64,
        })
    }
}

/// An animation fully decoded into independent RGBA8 frames.
///
/// The decoder reuses internal buffers while advancing, so each frame is
/// copied out; after this point the input handle is no longer needed.
#[derive(Clone, Debug)]
pub struct DecodedAnimation {
    pub frames: Vec<RgbaImage>,
    pub timing: AnimationTiming,
}

/// Decode an animated GIF from a path.
pub fn open_animation(path: &Path) -> BootanimResult<DecodedAnimation> {
    let file = File::open(path)
        .map_err(|e| BootanimError::decode(format!("open '{}': {e}", path.display())))?;
    decode_animation(BufReader::new(file))
}

/// Decode every frame of an animated GIF, recovering per-frame timing.
///
/// A single bounded pass yields both the frame sequence and the timing
/// aggregate; the frame count and the number of extracted frames agree by
/// construction.
pub fn decode_animation<R>(reader: R) -> BootanimResult<DecodedAnimation>
where
    R: std::io::BufRead + std::io::Seek,
{
    let decoder =
        GifDecoder::new(reader).map_err(|e| BootanimError::decode(format!("open gif: {e}")))?;

    let mut frames = Vec::new();
    let mut total_duration_ms = 0.0_f64;
    for frame in decoder.into_frames() {
        let frame = frame.map_err(|e| {
            BootanimError::decode(format!("decode frame {}: {e}", frames.len()))
        })?;
        let (numer, denom) = frame.delay().numer_denom_ms();
        total_duration_ms += f64::from(numer) / f64::from(denom);
        frames.push(frame.into_buffer());
    }

    let timing = AnimationTiming::new(frames.len(), total_duration_ms)?;
    Ok(DecodedAnimation { frames, timing })
}

/// Derive playback fps from recovered timing, truncating to an integer.
pub fn fps_from_timing(timing: AnimationTiming) -> BootanimResult<u32> {
    if timing.average_duration_ms <= 0.0 {
        return Err(BootanimError::validation(
            "cannot derive fps from zero frame durations; pass --fps",
        ));
    }
    Ok((1000.0 / timing.average_duration_ms) as u32)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{Delay, Frame, codecs::gif::GifEncoder};

    use super::*;

    fn gif_with_delays(delays_ms: &[u32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            for (i, &ms) in delays_ms.iter().enumerate() {
                let shade = (i * 40) as u8;
                let buffer = RgbaImage::from_pixel(4, 6, image::Rgba([shade, 0, 0, 255]));
                let frame = Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(ms, 1));
                encoder.encode_frame(frame).unwrap();
            }
        }
        bytes
    }

    #[test]
    fn frame_count_matches_encoded_frames() {
        let gif = gif_with_delays(&[100, 100, 100]);
        let decoded = decode_animation(Cursor::new(gif)).unwrap();
        assert_eq!(decoded.frames.len(), 3);
        assert_eq!(decoded.timing.frame_count, 3);
        for frame in &decoded.frames {
            assert_eq!(frame.dimensions(), (4, 6));
        }
    }

    #[test]
    fn timing_average_over_all_frames() {
        let gif = gif_with_delays(&[100, 100]);
        let decoded = decode_animation(Cursor::new(gif)).unwrap();
        assert_eq!(decoded.timing.total_duration_ms, 200.0);
        assert_eq!(decoded.timing.average_duration_ms, 100.0);
        assert_eq!(fps_from_timing(decoded.timing).unwrap(), 10);
    }

    #[test]
    fn fps_truncates_toward_zero() {
        let timing = AnimationTiming::new(3, 3.0 * 66.0).unwrap();
        // 1000 / 66 = 15.15..
        assert_eq!(fps_from_timing(timing).unwrap(), 15);
    }

    #[test]
    fn zero_frames_fail_before_averaging() {
        let err = AnimationTiming::new(0, 0.0).unwrap_err();
        assert!(matches!(err, BootanimError::Decode(_)));
    }

    #[test]
    fn zero_duration_cannot_derive_fps() {
        let timing = AnimationTiming::new(2, 0.0).unwrap();
        assert!(matches!(
            fps_from_timing(timing),
            Err(BootanimError::Validation(_))
        ));
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let err = decode_animation(Cursor::new(b"not a gif".to_vec())).unwrap_err();
        assert!(matches!(err, BootanimError::Decode(_)));
    }
}
