use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use anyhow::Context as _;
use zip::{ZipArchive, ZipWriter, write::SimpleFileOptions};

use crate::{
    descriptor::Descriptor,
    error::{BootanimError, BootanimResult},
};

/// Name of the descriptor entry inside the archive.
pub const DESC_ENTRY: &str = "desc.txt";

/// A boot-animation zip being written.
///
/// Entries land in call order: the descriptor first, then frames in
/// ascending index order. The zip is only valid once [`BootArchive::finish`]
/// returns; a failed build may leave an incomplete file on disk.
pub struct BootArchive {
    writer: ZipWriter<File>,
}

impl BootArchive {
    /// Open `path` for writing, creating parent directories as needed.
    pub fn create(path: &Path) -> BootanimResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory '{}'", parent.display()))?;
        }
        let file = File::create(path)
            .map_err(|e| BootanimError::archive(format!("create '{}': {e}", path.display())))?;
        Ok(Self {
            writer: ZipWriter::new(file),
        })
    }

    /// Write the `desc.txt` entry.
    pub fn write_descriptor(&mut self, text: &str) -> BootanimResult<()> {
        self.start_entry(DESC_ENTRY)?;
        self.write_bytes(DESC_ENTRY, text.as_bytes())
    }

    /// Write one encoded frame under its part folder.
    pub fn write_frame(&mut self, name: &str, bytes: &[u8]) -> BootanimResult<()> {
        self.start_entry(name)?;
        self.write_bytes(name, bytes)
    }

    /// Finalize the archive. Nothing is written after this.
    pub fn finish(mut self) -> BootanimResult<()> {
        self.writer
            .finish()
            .map_err(|e| BootanimError::archive(format!("finalize zip: {e}")))?;
        Ok(())
    }

    fn start_entry(&mut self, name: &str) -> BootanimResult<()> {
        self.writer
            .start_file(name, SimpleFileOptions::default())
            .map_err(|e| BootanimError::archive(format!("start entry '{name}': {e}")))
    }

    fn write_bytes(&mut self, name: &str, bytes: &[u8]) -> BootanimResult<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| BootanimError::archive(format!("write entry '{name}': {e}")))
    }
}

/// Zero-pad width for frame names: the number of decimal digits in the
/// total frame count, applied uniformly to every 0-based index.
pub fn padding_width(frame_count: usize) -> usize {
    frame_count.to_string().len()
}

/// Archive entry name for one frame, e.g. `part0/007.png`.
pub fn frame_entry_name(folder: &str, index: usize, padding: usize) -> String {
    format!("{folder}/{index:0padding$}.png")
}

/// What an existing archive declares about itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub descriptor: Descriptor,
    pub frame_entries: usize,
}

/// Read back an archive's descriptor and count its frame entries.
pub fn inspect(path: &Path) -> BootanimResult<ArchiveSummary> {
    let file = File::open(path)
        .map_err(|e| BootanimError::archive(format!("open '{}': {e}", path.display())))?;
    let mut zip = ZipArchive::new(file)
        .map_err(|e| BootanimError::archive(format!("read '{}': {e}", path.display())))?;

    let mut text = String::new();
    {
        let mut entry = zip
            .by_name(DESC_ENTRY)
            .map_err(|e| BootanimError::archive(format!("missing {DESC_ENTRY}: {e}")))?;
        entry
            .read_to_string(&mut text)
            .map_err(|e| BootanimError::archive(format!("read {DESC_ENTRY}: {e}")))?;
    }

    let frame_entries = zip.file_names().filter(|n| n.ends_with(".png")).count();
    Ok(ArchiveSummary {
        descriptor: Descriptor::parse(&text)?,
        frame_entries,
    })
}
