//! Small helpers shared by the library and the desktop binary.

use std::path::{Path, PathBuf};

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}

/// File name of `path` for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Expand command line arguments into queue entries, preserving order.
///
/// Arguments containing glob metacharacters are expanded (matches sorted as
/// `glob` yields them); anything else is passed through untouched, so a
/// missing literal path still reaches the queue and fails at merge time.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>, glob::PatternError>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !is_glob_pattern(pattern) {
            resolved_paths.push(PathBuf::from(pattern));
            continue;
        }

        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => resolved_paths.push(path),
                Err(err) => log::warn!("Skipping unreadable glob match: {err}"),
            }
        }
    }

    Ok(resolved_paths)
}

fn is_glob_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}
