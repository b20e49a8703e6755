use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

/// Copy a directory tree, preserving file mode and symlinks.
///
/// Returns the number of files copied. Individual file failures are
/// reported and skipped; only walking the source itself is fatal.
pub fn copy_tree(source: &Path, destination: &Path) -> io::Result<usize> {
    let mut copied_count = 0;

    for entry in WalkDir::new(source)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let rel_path = match path.strip_prefix(source) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let dest_path = destination.join(rel_path);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&dest_path)?;
        } else if file_type.is_symlink() {
            if let Err(e) = copy_symlink(path, &dest_path) {
                warn!("Failed to copy symlink {}: {}", path.display(), e);
            } else {
                copied_count += 1;
            }
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }

            // fs::copy carries permissions over to the destination
            match fs::copy(path, &dest_path) {
                Ok(_) => {
                    debug!("Copied file: {} -> {}", path.display(), dest_path.display());
                    copied_count += 1;
                }
                Err(e) => {
                    warn!("Failed to copy file {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(copied_count)
}

#[cfg(unix)]
fn copy_symlink(source: &Path, destination: &Path) -> io::Result<()> {
    let link_target = fs::read_link(source)?;
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    std::os::unix::fs::symlink(link_target, destination)
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, destination: &Path) -> io::Result<()> {
    // No portable symlink creation; fall back to copying the target
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, destination).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_tree_preserves_layout() {
        let root = std::env::temp_dir()
            .join(format!("rustfolio-copy-test-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);

        let source = root.join("src");
        fs::create_dir_all(source.join("nested")).unwrap();
        fs::write(source.join("style.css"), "body {}").unwrap();
        fs::write(source.join("nested/app.js"), "init();").unwrap();

        let destination = root.join("dst");
        let copied = copy_tree(&source, &destination).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(destination.join("style.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(destination.join("nested/app.js")).unwrap(), "init();");

        let _ = fs::remove_dir_all(&root);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_preserves_symlinks() {
        let root = std::env::temp_dir()
            .join(format!("rustfolio-copy-symlink-test-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);

        let source = root.join("src");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("real.css"), "body {}").unwrap();
        std::os::unix::fs::symlink("real.css", source.join("link.css")).unwrap();

        let destination = root.join("dst");
        copy_tree(&source, &destination).unwrap();

        let copied_link = destination.join("link.css");
        assert!(copied_link.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&copied_link).unwrap(), std::path::PathBuf::from("real.css"));

        let _ = fs::remove_dir_all(&root);
    }
}
