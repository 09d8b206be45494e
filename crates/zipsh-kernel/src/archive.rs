//! Archive ingestion.
//!
//! A zip archive is read into an ordered catalog of [`ArchiveEntry`] values,
//! then the catalog is replayed into a fresh [`Vfs`]:
//!
//! - directory entries (`docs/`) create the directory and any missing parents
//! - file entries create their parent directories and store the payload
//! - file entries ending in `.b64` are base64-decoded and stored as binary
//!   files with the suffix stripped (`logo.png.b64` becomes `logo.png`)
//!
//! Any failure aborts the whole load. There is no partial tree to roll back
//! because a load error ends the process.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use thiserror::Error;
use zip::ZipArchive;

use crate::vfs::{Node, NodeId, Vfs};

/// Filename suffix marking a base64 payload.
pub const BINARY_SUFFIX: &str = ".b64";

/// Display name used when no archive is loaded.
pub const NO_VFS_NAME: &str = "no-vfs";

/// Signature of the end-of-central-directory record.
const EOCD_SIGNATURE: &[u8; 4] = b"PK\x05\x06";
/// Fixed size of the end record plus the largest possible trailing comment.
const EOCD_SEARCH_WINDOW: u64 = 22 + u16::MAX as u64;

/// Standard alphabet; non-zero trailing bits in the last symbol are accepted.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Errors that abort an archive load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a zip file: {0}")]
    NotAnArchive(String),
    #[error("bad zip: {0}")]
    Corrupt(String),
    #[error("invalid base64 in {entry}: {source}")]
    InvalidBase64 {
        entry: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("path component is file: {0}")]
    PathConflict(String),
    #[error("invalid entry name: {0}")]
    InvalidEntryName(String),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One entry of an archive, in archive order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive, as stored (directories end with `/`).
    pub path: String,
    pub data: Vec<u8>,
    pub is_dir: bool,
}

impl ArchiveEntry {
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: Vec::new(),
            is_dir: true,
        }
    }

    pub fn file(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
            is_dir: false,
        }
    }
}

/// A tree built from an archive on disk.
#[derive(Debug)]
pub struct LoadedArchive {
    pub vfs: Vfs,
    /// Archive file name without its extension.
    pub name: String,
}

/// Load the zip archive at `path` into a new tree.
pub fn load_archive(path: &Path) -> Result<LoadedArchive, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = read_catalog(file).map_err(|err| match err {
        LoadError::NotAnArchive(_) => LoadError::NotAnArchive(path.display().to_string()),
        other => other,
    })?;
    let vfs = ingest(entries)?;
    let name = archive_name(path);

    tracing::info!(archive = %path.display(), name = %name, nodes = vfs.len(), "loaded archive");
    Ok(LoadedArchive { vfs, name })
}

/// Display name for an archive: its file name without the extension.
pub fn archive_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read every entry of a zip container, in catalog order.
///
/// Input without an end-of-central-directory record is
/// [`LoadError::NotAnArchive`]; anything wrong past that point is
/// [`LoadError::Corrupt`].
pub fn read_catalog<R: Read + Seek>(mut reader: R) -> Result<Vec<ArchiveEntry>, LoadError> {
    match has_end_record(&mut reader) {
        Ok(true) => {}
        Ok(false) => return Err(LoadError::NotAnArchive("no end of central directory".into())),
        Err(e) => return Err(LoadError::NotAnArchive(e.to_string())),
    }
    let mut archive = ZipArchive::new(reader).map_err(|e| LoadError::Corrupt(e.to_string()))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| LoadError::Corrupt(e.to_string()))?;
        let path = file.name().to_string();
        if file.is_dir() {
            entries.push(ArchiveEntry::dir(path));
            continue;
        }
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| LoadError::Corrupt(format!("{path}: {e}")))?;
        entries.push(ArchiveEntry::file(path, data));
    }
    Ok(entries)
}

/// True if the tail of `reader` holds an end-of-central-directory signature.
fn has_end_record<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let len = reader.seek(SeekFrom::End(0))?;
    let start = len.saturating_sub(EOCD_SEARCH_WINDOW);
    reader.seek(SeekFrom::Start(start))?;
    let mut tail = Vec::new();
    reader.read_to_end(&mut tail)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(tail.windows(EOCD_SIGNATURE.len()).any(|w| w == EOCD_SIGNATURE))
}

/// Build a tree from catalog entries, applied in order.
pub fn ingest(entries: impl IntoIterator<Item = ArchiveEntry>) -> Result<Vfs, LoadError> {
    let mut vfs = Vfs::new();
    let (mut files, mut dirs) = (0usize, 0usize);

    for entry in entries {
        if entry.is_dir {
            ensure_dir(&mut vfs, &entry.path)?;
            dirs += 1;
            continue;
        }

        let trimmed = entry.path.trim_matches('/');
        let (dir_part, leaf) = trimmed.rsplit_once('/').unwrap_or(("", trimmed));
        let dir = ensure_dir(&mut vfs, dir_part)?;

        let (name, content, is_binary) = match leaf.strip_suffix(BINARY_SUFFIX) {
            Some(stem) => (stem, decode_payload(&entry.path, &entry.data)?, true),
            None => (leaf, entry.data, false),
        };
        if matches!(name, "" | "." | "..") {
            return Err(LoadError::InvalidEntryName(entry.path));
        }
        vfs.add(dir, Node::file(name, content, is_binary))
            .map_err(|_| conflict(dir_part))?;
        files += 1;
    }

    tracing::debug!(files, dirs, "ingested catalog");
    Ok(vfs)
}

/// Walk `path` from the root, creating missing directories.
fn ensure_dir(vfs: &mut Vfs, path: &str) -> Result<NodeId, LoadError> {
    let mut current = vfs.root();
    for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment == ".." {
            return Err(LoadError::InvalidEntryName(path.to_string()));
        }
        current = match vfs.get(current, segment) {
            Some(id) if vfs.is_dir(id) => id,
            Some(_) => return Err(conflict(path)),
            None => vfs
                .add(current, Node::directory(segment))
                .map_err(|_| conflict(path))?,
        };
    }
    Ok(current)
}

fn conflict(path: &str) -> LoadError {
    LoadError::PathConflict(format!("/{}", path.trim_matches('/')))
}

/// Decode a `.b64` payload. Bytes outside the base64 alphabet (line
/// wrapping, stray punctuation) are discarded before decoding.
fn decode_payload(entry: &str, data: &[u8]) -> Result<Vec<u8>, LoadError> {
    let compact: Vec<u8> = data
        .iter()
        .copied()
        .filter(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
        .collect();
    LENIENT_BASE64
        .decode(compact)
        .map_err(|source| LoadError::InvalidBase64 {
            entry: entry.to_string(),
            source,
        })
}
