use crate::error::{BootanimError, BootanimResult};

/// One playback segment referencing a folder of frames inside the archive.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Part {
    pub loop_count: u32,
    pub delay: u32,
    pub folder: String,
}

impl Part {
    pub fn new(loop_count: u32, delay: u32, folder: impl Into<String>) -> Self {
        Self {
            loop_count,
            delay,
            folder: folder.into(),
        }
    }
}

/// The textual manifest (`desc.txt`) describing a boot animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Descriptor {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub parts: Vec<Part>,
}

impl Descriptor {
    /// Render the descriptor text exactly as the device expects it:
    ///
    /// ```text
    /// {width} {height} {fps}
    /// p {loop} {delay} {folder}
    /// ```
    ///
    /// one `p` line per part, newline-terminated. Pure; no IO.
    pub fn render(&self) -> String {
        let mut desc = format!("{} {} {}\n", self.width, self.height, self.fps);
        for part in &self.parts {
            desc.push_str(&format!(
                "p {} {} {}\n",
                part.loop_count, part.delay, part.folder
            ));
        }
        desc
    }

    /// Parse descriptor text back into a [`Descriptor`]. Strict inverse of
    /// [`Descriptor::render`]: a malformed header or an unknown line tag is
    /// an error.
    pub fn parse(text: &str) -> BootanimResult<Self> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| BootanimError::archive("empty descriptor"))?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        let &[width, height, fps] = fields.as_slice() else {
            return Err(BootanimError::archive(format!(
                "malformed descriptor header '{header}'"
            )));
        };

        let mut parts = Vec::new();
        for line in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let &["p", loop_count, delay, folder] = fields.as_slice() else {
                return Err(BootanimError::archive(format!(
                    "malformed descriptor part line '{line}'"
                )));
            };
            parts.push(Part::new(
                parse_field(loop_count, "loop")?,
                parse_field(delay, "delay")?,
                folder,
            ));
        }

        Ok(Self {
            width: parse_field(width, "width")?,
            height: parse_field(height, "height")?,
            fps: parse_field(fps, "fps")?,
            parts,
        })
    }
}

fn parse_field(value: &str, name: &str) -> BootanimResult<u32> {
    value
        .parse()
        .map_err(|_| BootanimError::archive(format!("descriptor {name} '{value}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_part_exactly() {
        let desc = Descriptor {
            width: 768,
            height: 1270,
            fps: 30,
            parts: vec![Part::new(0, 0, "part0")],
        };
        assert_eq!(desc.render(), "768 1270 30\np 0 0 part0\n");
    }

    #[test]
    fn renders_one_line_per_part() {
        let desc = Descriptor {
            width: 480,
            height: 800,
            fps: 15,
            parts: vec![Part::new(0, 0, "part0"), Part::new(2, 50, "part1")],
        };
        assert_eq!(desc.render(), "480 800 15\np 0 0 part0\np 2 50 part1\n");
    }

    #[test]
    fn parse_is_the_inverse_of_render() {
        let desc = Descriptor {
            width: 768,
            height: 1270,
            fps: 10,
            parts: vec![Part::new(0, 0, "part0")],
        };
        assert_eq!(Descriptor::parse(&desc.render()).unwrap(), desc);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in ["", "768 1270\n", "768 1270 30\nq 0 0 part0\n", "w h fps\n"] {
            assert!(Descriptor::parse(text).is_err(), "{text:?}");
        }
    }
}
