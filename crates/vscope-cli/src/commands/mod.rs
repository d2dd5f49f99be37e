//! CLI command implementations

pub mod convert;
pub mod render;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Writes bytes to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write: {}", path.display())),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(bytes).context("Failed to write to stdout")?;
            out.flush().context("Failed to flush stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scope.txt");
        write_output(Some(&path), b"  .:-=+*#%@\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"  .:-=+*#%@\n");
    }

    #[test]
    fn test_write_output_bad_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scope.png");
        let err = write_output(Some(&path), b"x").unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
