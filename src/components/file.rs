use std::{
    ffi::OsString,
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::components::{common::OUTPUT_SUFFIX, emitter::to_c_array};

/// Failures of [`dump_file`]. Both are terminal.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

/// The input path with [`OUTPUT_SUFFIX`] appended, e.g. `blob.bin` becomes
/// `blob.bin.c`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

/// Read `input` and write its `static uint8_t` declaration named `name`
/// to `output`, returning the number of bytes embedded.
///
/// The declaration is written to a temporary file next to `output` and
/// renamed over it once complete. On failure `output` is left as it was.
/// An existing `output` keeps its permissions, and a symlinked `output`
/// has the file it points to replaced rather than the link.
pub fn dump_file(
    input: &Path,
    output: &Path,
    name: &str,
) -> Result<usize, DumpError> {
    let bytes = fs::read(input).map_err(|source| DumpError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let text = to_c_array(name, &bytes);

    write_atomic(output, text.as_bytes()).map_err(|source| DumpError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(bytes.len())
}

fn write_atomic(
    path: &Path,
    contents: &[u8],
) -> io::Result<()> {
    // Write through symlinks and keep the mode of a file being replaced.
    let existing = fs::metadata(path).ok();
    let target = match existing {
        Some(_) => fs::canonicalize(path)?,
        None => path.to_path_buf(),
    };

    // A bare file name has an empty parent.
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_builder().tempfile_in(dir)?;
    if let Some(meta) = existing {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    persist(tmp, &target)
}

#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // Temporary files are created 0600; new generated sources are 0644.
    let mut builder = tempfile::Builder::new();
    builder
        .prefix(".ctab")
        .permissions(fs::Permissions::from_mode(0o644));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".ctab");
    builder
}

fn persist(
    tmp: NamedTempFile,
    path: &Path,
) -> io::Result<()> {
    tmp.persist(path).map(|_| ()).map_err(|e| e.error)
}
