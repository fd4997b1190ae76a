//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if the last path component starts with a dot.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_get_extension() {
        assert_eq!(get_extension(&PathBuf::from("movie.MKV")), Some("mkv".to_string()));
        assert_eq!(get_extension(&PathBuf::from("movie")), None);
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(&PathBuf::from("/movies/.cache")));
        assert!(!is_hidden(&PathBuf::from("/movies/Terminator")));
    }

    #[test]
    fn test_ensure_directory_missing() {
        let result = ensure_directory(&PathBuf::from("/nonexistent/path"));
        assert!(matches!(result, Err(crate::Error::PathNotFound(_))));
    }
}
