//! Excel出力（CLI版）
//!
//! 一時ファイルに書いてからリネームし、失敗時は途中のファイルを残さない。

use crate::error::{FlattenError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

fn temp_path_for(output_path: &Path) -> PathBuf {
    let file_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "output.xlsx".to_string());
    output_path.with_file_name(format!(".{}.tmp", file_name))
}

/// ブックのバイト列を出力先に保存
pub fn save_workbook(bytes: &[u8], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(output_path);
    let result = std::fs::write(&temp_path, bytes)
        .and_then(|_| std::fs::rename(&temp_path, output_path));

    if let Err(e) = result {
        if temp_path.exists() {
            if let Err(remove_err) = std::fs::remove_file(&temp_path) {
                warn!(path = %temp_path.display(), error = %remove_err, "failed to remove temp file");
            }
        }
        return Err(FlattenError::ExcelGeneration(format!(
            "{}: {}",
            output_path.display(),
            e
        )));
    }

    Ok(())
}
