use std::fs;
use std::path::Path;

use log::warn;

use crate::utils::error::BoxResult;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(contents)
}

/// Read a file to string, degrading to an empty string on failure.
///
/// Unreadable input files are reported but never abort a build; the
/// caller gets empty content instead.
pub fn read_file_or_empty<P: AsRef<Path>>(path: P) -> String {
    match fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read file {}: {}", path.as_ref().display(), e);
            String::new()
        }
    }
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_or_empty_missing_file() {
        let contents = read_file_or_empty("/nonexistent/rustfolio/file.html");
        assert_eq!(contents, "");
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = std::env::temp_dir()
            .join(format!("rustfolio-fs-test-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let path = dir.join("a/b/page.html");
        write_file(&path, "<html></html>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<html></html>");

        let _ = fs::remove_dir_all(&dir);
    }
}
