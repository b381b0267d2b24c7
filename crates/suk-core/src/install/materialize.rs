//! Writing rendered files to disk under the conflict policy

use crate::error::{Result, SukError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Write `content` to `target`, creating parent directories as needed.
///
/// Without `overwrite` an existing file is a `FileConflict` and is left byte
/// for byte as it was. The no-clobber path opens with `create_new`, so the
/// existence check and the write are a single filesystem operation.
pub async fn materialize(target: &Path, content: &str, overwrite: bool) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SukError::io(parent, e))?;
        }
    }

    if overwrite {
        fs::write(target, content)
            .await
            .map_err(|e| SukError::io(target, e))?;
    } else {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(target)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => SukError::FileConflict {
                    path: target.to_path_buf(),
                },
                _ => SukError::io(target, e),
            })?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| SukError::io(target, e))?;
        file.flush().await.map_err(|e| SukError::io(target, e))?;
    }

    tracing::debug!("Wrote {} ({} bytes)", target.display(), content.len());
    Ok(())
}
