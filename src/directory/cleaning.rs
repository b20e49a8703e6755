use std::fs;
use std::io;
use std::path::Path;

use log::info;

/// Remove any previous build output and recreate the destination directory
pub fn clean_destination<P: AsRef<Path>>(destination: P) -> io::Result<()> {
    let destination = destination.as_ref();

    if destination.exists() {
        info!("Cleaning destination directory: {}", destination.display());
        fs::remove_dir_all(destination)?;
    }

    fs::create_dir_all(destination)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_destination_removes_old_output() {
        let dir = std::env::temp_dir()
            .join(format!("rustfolio-clean-test-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        fs::create_dir_all(dir.join("stale")).unwrap();
        fs::write(dir.join("stale/old.html"), "old").unwrap();

        clean_destination(&dir).unwrap();
        assert!(dir.exists());
        assert!(!dir.join("stale").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_clean_destination_creates_missing_directory() {
        let dir = std::env::temp_dir()
            .join(format!("rustfolio-clean-missing-test-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        clean_destination(&dir).unwrap();
        assert!(dir.is_dir());

        let _ = fs::remove_dir_all(&dir);
    }
}
