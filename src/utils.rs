//! Small helpers: log-friendly truncation and output-path validation.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;

use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for progress logging.
///
/// Counts characters, not bytes, so multi-byte Spanish titles never split
/// mid-character. Longer strings get an ellipsis appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push('…');
        out
    }
}

/// Ensure the directory that will hold the output file exists and is
/// writable, by probing with a throwaway file.
///
/// Called before any network work so a doomed run fails immediately instead
/// of after the whole catalog has been fetched.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %output_file.display()))]
pub async fn ensure_writable_output(output_file: &Path) -> Result<(), Box<dyn Error>> {
    let dir = match output_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };

    if let Err(e) = fs::create_dir_all(&dir).await {
        return Err(Box::new(e));
    }
    let probe_path = dir.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
