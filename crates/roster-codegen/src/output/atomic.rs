use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

/// Write `data` to `path` through a sibling temporary file and a rename.
///
/// Either the complete new contents end up at `path` or `path` is left as it
/// was; the temporary file is removed when any step before the rename fails.
/// Once the rename succeeded the write is reported as done, even if the
/// directory entry could not be flushed afterwards.
pub fn write_source_atomic(path: &Path, data: &[u8]) -> io::Result<u64> {
    write_with_dir_sync(path, data, sync_dir)
}

fn write_with_dir_sync(
    path: &Path,
    data: &[u8],
    sync: impl Fn(&Path) -> io::Result<()>,
) -> io::Result<u64> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let result = write_and_rename(&tmp_path, path, data);
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result?;

    if let Some(parent) = parent {
        if let Err(err) = sync(parent) {
            warn!(
                event = "dir_sync_failed",
                path = %parent.display(),
                error = %err
            );
        }
    }

    Ok(data.len() as u64)
}

fn write_and_rename(tmp_path: &Path, path: &Path, data: &[u8]) -> io::Result<()> {
    {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
    }

    std::fs::rename(tmp_path, path)
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
