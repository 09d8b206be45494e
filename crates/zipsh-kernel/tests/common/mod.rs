//! Shared helpers for kernel integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use zipsh_kernel::archive::{ingest, ArchiveEntry};
use zipsh_kernel::{Kernel, KernelConfig};

/// Entry description for [`build_zip`]: a trailing `/` marks a directory.
pub type ZipEntry<'a> = (&'a str, &'a [u8]);

/// Build a zip archive in memory. Entries are stored uncompressed.
pub fn build_zip(entries: &[ZipEntry<'_>]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (path, data) in entries {
        if path.ends_with('/') {
            writer.add_directory(*path, options).unwrap();
        } else {
            writer.start_file(*path, options).unwrap();
            writer.write_all(data).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// A session over a small tree:
///
/// ```text
/// /
/// ├── a/x          "payload"
/// ├── b/
/// └── docs/readme.md
/// ```
pub fn kernel() -> Kernel {
    let vfs = ingest([
        ArchiveEntry::file("a/x", "payload"),
        ArchiveEntry::dir("b/"),
        ArchiveEntry::file("docs/readme.md", "# readme\n"),
    ])
    .unwrap();
    Kernel::with_vfs(KernelConfig::default(), vfs, "fixture")
}

/// Run a line and return stdout, panicking on failure.
pub fn ok(kernel: &mut Kernel, line: &str) -> String {
    let outcome = kernel.run_line(line, false);
    assert_eq!(outcome.code(), 0, "`{line}` failed: {}", outcome.result.err);
    outcome.result.out
}
