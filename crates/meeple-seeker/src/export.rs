//! Writes a name list to disk, one name per line.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SeekerError};

/// Where names go when no path (or a blank one) is given.
pub const DEFAULT_EXPORT_PATH: &str = "temp/games.txt";

/// Returns `path`, or [`DEFAULT_EXPORT_PATH`] when it is missing or blank.
pub fn resolve_export_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(DEFAULT_EXPORT_PATH),
    }
}

/// Writes `names` to `path` one per line, creating parent directories.
///
/// Returns the path actually written.
pub fn write_names<I, S>(path: Option<&Path>, names: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = resolve_export_path(path);
    let fail = |source| SeekerError::Export {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    let mut writer = BufWriter::new(File::create(&path).map_err(fail)?);
    let mut count = 0usize;
    for name in names {
        writeln!(writer, "{}", name.as_ref()).map_err(fail)?;
        count += 1;
    }
    writer.flush().map_err(fail)?;

    debug!("exported {} names to {}", count, path.display());
    Ok(path)
}
