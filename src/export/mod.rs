pub mod excel;

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// 出力ファイル名の日時プレフィックス
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S-";

/// 拡張子が .xlsx か（大文字小文字を区別しない）
fn has_xlsx_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// 出力ファイル名を決める（.xlsx でなければ付ける）
pub fn output_file_name(name: &str, timestamp: Option<DateTime<Local>>) -> String {
    let name = if has_xlsx_extension(name) {
        name.to_string()
    } else {
        format!("{}.xlsx", name)
    };

    match timestamp {
        Some(at) => format!("{}{}", at.format(TIMESTAMP_FORMAT), name),
        None => name,
    }
}

pub fn output_path(output_dir: &Path, name: &str, timestamp: Option<DateTime<Local>>) -> PathBuf {
    output_dir.join(output_file_name(name, timestamp))
}
