//! Writing export artifacts to disk or a stream

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qm_data::ExportArtifact;

/// Write `artifact` into `dir` under its own filename, creating `dir` if needed
pub fn save_to_dir(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(&artifact.filename);
    save_to_path(artifact, &path)?;
    Ok(path)
}

/// Write `artifact` to exactly `path`
pub fn save_to_path(artifact: &ExportArtifact, path: &Path) -> Result<()> {
    std::fs::write(path, &artifact.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} bytes to {}", artifact.content.len(), path.display());
    Ok(())
}

/// Stream `artifact` unchanged, e.g. to stdout
pub fn write_to(artifact: &ExportArtifact, mut writer: impl Write) -> Result<()> {
    writer
        .write_all(&artifact.content)
        .context("Failed to write export")?;
    writer.flush().context("Failed to flush export")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm_data::CSV_MIME_TYPE;

    fn artifact() -> ExportArtifact {
        ExportArtifact {
            filename: "central-highlands-qualification-rampup.csv".to_string(),
            content: b"Year,Annual Qualifications Needed\n2024,0\n".to_vec(),
            mime: CSV_MIME_TYPE,
        }
    }

    #[test]
    fn test_save_to_dir_uses_artifact_filename() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");

        let path = save_to_dir(&artifact(), &nested).unwrap();
        assert_eq!(path, nested.join("central-highlands-qualification-rampup.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), artifact().content);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale").unwrap();

        save_to_path(&artifact(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), artifact().content);
    }

    #[test]
    fn test_save_into_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(save_to_path(&artifact(), &path).is_err());
    }

    #[test]
    fn test_write_to_stream() {
        let mut buffer = Vec::new();
        write_to(&artifact(), &mut buffer).unwrap();
        assert_eq!(buffer, artifact().content);
    }
}
