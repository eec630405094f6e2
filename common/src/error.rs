//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 1レコード分の行が揃う前に入力が終わった
    #[error("Truncated record: input ended after {rows_read} of {expected} rows of the last record")]
    TruncatedRecord { rows_read: usize, expected: usize },

    #[error("Invalid column mapping: {0}")]
    InvalidColumnMapping(String),

    #[error("Sheet error: {0}")]
    Sheet(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
