use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub async fn read_file_to_string(path: &Path) -> Result<String, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path).await?)
}

/// Writes `value` as pretty JSON to `destination`, or to stdout when the
/// destination is `-`.
pub async fn write_json_pretty<T: Serialize>(
    value: &T,
    destination: &Path,
) -> Result<(), FileError> {
    let mut content = serde_json::to_vec_pretty(value)?;
    content.push(b'\n');

    if destination == Path::new("-") {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(&content).await?;
        stdout.flush().await?;
        return Ok(());
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(destination, &content).await?;
    info!(
        "Wrote {} bytes to {}",
        content.len(),
        destination.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file_to_string(&dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(FileError::NotFound(_))));
    }

    #[tokio::test]
    async fn write_json_pretty_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out.json");

        write_json_pretty(&serde_json::json!({ "a": [1, 2] }), &target)
            .await
            .unwrap();

        let written = read_file_to_string(&target).await.unwrap();
        assert!(written.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["a"][1], 2);
    }
}
