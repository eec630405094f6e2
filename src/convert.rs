//! 応募履歴Excelの変換
//!
//! ## 処理フロー
//! 1. 入力シートの読み込み（calamine）
//! 2. 行グルーピング・Jobs / Viewed への振り分け
//! 3. xlsx保存

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::reader;
use chrono::Local;
use flatten_jobs_common::{
    flatten, FlattenStats, JobRecord, Placement, RecordGrouper, RecordRouter, WorkbookWriter,
};
use std::path::PathBuf;
use tracing::info;

/// 変換結果
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub stats: FlattenStats,
    pub output_path: PathBuf,
}

/// 設定に従って変換し、出力ファイルを保存
pub fn convert(config: &Config) -> Result<ConversionSummary> {
    config.validate()?;
    let input = config.input_path()?;

    println!("[1/3] 入力ファイルを読み込み中...");
    let rows = reader::open_rows(
        input,
        config.input_sheet_name.as_deref(),
        config.input_column_number,
    )?;
    println!("✔ {}行を検出\n", rows.len());

    println!("[2/3] レコードを変換中...");
    let mut writer = WorkbookWriter::new()?;
    let stats = flatten(rows, &config.output_columns_location, &mut writer)?;
    println!(
        "✔ {}件（Jobs: {}件 / Viewed: {}件）\n",
        stats.records(),
        stats.applied,
        stats.viewed
    );

    println!("[3/3] Excelを保存中...");
    let timestamp = config.timestamp_output_file_name.then(Local::now);
    let output_path = export::output_path(
        &config.output_file_path,
        &config.output_file_name,
        timestamp,
    );
    let bytes = writer.save_to_buffer()?;
    export::excel::save_workbook(&bytes, &output_path)?;
    println!("✔ Excel出力: {}", output_path.display());

    info!(input = %input.display(), output = %output_path.display(), "conversion completed");
    Ok(ConversionSummary { stats, output_path })
}

/// 変換結果をファイルに書かずに返す
///
/// `limit` 件に達したら残りの行は読まない。
pub fn preview(config: &Config, limit: Option<usize>) -> Result<Vec<(Placement, JobRecord)>> {
    config.validate()?;
    let input = config.input_path()?;
    let rows = reader::open_rows(
        input,
        config.input_sheet_name.as_deref(),
        config.input_column_number,
    )?;

    let mut router = RecordRouter::new();
    let mut placed = Vec::new();
    for record in RecordGrouper::new(rows).take(limit.unwrap_or(usize::MAX)) {
        let record = record?;
        placed.push((router.place(&record), record));
    }
    Ok(placed)
}
