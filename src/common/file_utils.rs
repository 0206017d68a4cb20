use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::AppError;
use log::debug;

/// Lists the direct entries of `dir_path`, joined onto it and sorted by
/// file name. Hidden entries and subdirectories are included.
pub fn list_sorted_entries(dir_path: &Path) -> Result<Vec<PathBuf>, AppError> {
    let read_dir = fs::read_dir(dir_path).map_err(|e| AppError::io(dir_path, e))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| AppError::io(dir_path, e))?;
        names.push(entry.file_name());
    }
    names.sort();
    debug!("Listed {} entries in '{}'", names.len(), dir_path.display());

    Ok(names.into_iter().map(|name| dir_path.join(name)).collect())
}

/// Reads a whole file as text.
///
/// Invalid UTF-8 is replaced rather than rejected, and `\r\n` / `\r` line
/// endings are translated to `\n`.
pub fn read_text_file(file_path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(file_path).map_err(|e| AppError::io(file_path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(normalize_newlines(&text))
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
