//! 入力Excelの読み込み
//!
//! calamineで1シートを読み、指定列の値を上から1行ずつ返す。

use crate::error::{FlattenError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use flatten_jobs_common::Row;
use std::path::Path;
use tracing::debug;

/// 1列分の行ソース
///
/// 使用範囲より上の空行も空セルとして返すため、行位置はシート上と一致する。
/// 末尾の完全な空行（どの列にも値がない行）は返さない。
pub struct SheetRows {
    range: Range<Data>,
    column: u32,
    next: u32,
    end: Option<u32>,
}

impl SheetRows {
    /// `column` は1始まり
    pub fn new(range: Range<Data>, column: u16) -> Self {
        let column = u32::from(column.saturating_sub(1));
        let end = last_used_row(&range);
        Self {
            range,
            column,
            next: 0,
            end,
        }
    }

    /// 返す予定の行数
    pub fn len(&self) -> usize {
        self.end.map(|end| end as usize + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.end.is_none()
    }
}

impl Iterator for SheetRows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let end = self.end?;
        if self.next > end {
            return None;
        }
        let row = self
            .range
            .get_value((self.next, self.column))
            .and_then(cell_text);
        self.next += 1;
        Some(row)
    }
}

/// いずれかの列に値のある最後の行（絶対位置）
///
/// 入力列が空でも他の列に値があれば、その行は空セルとして読む。
fn last_used_row(range: &Range<Data>) -> Option<u32> {
    let (start_row, start_col) = range.start()?;
    let (end_row, end_col) = range.end()?;
    (start_row..=end_row).rev().find(|&row| {
        (start_col..=end_col).any(|col| {
            range
                .get_value((row, col))
                .and_then(cell_text)
                .is_some()
        })
    })
}

/// セル値をテキストに変換（空セルは `None`）
pub fn cell_text(cell: &Data) -> Row {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// 入力Excelを開いて行ソースを作る
pub fn open_rows(path: &Path, sheet: Option<&str>, column: u16) -> Result<SheetRows> {
    if !path.exists() {
        return Err(FlattenError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| FlattenError::InputRead(format!("{}: {}", path.display(), e)))?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(FlattenError::SheetNotFound(name.to_string()));
            }
            workbook
                .worksheet_range(name)
                .map_err(|e| FlattenError::InputRead(format!("{}: {}", name, e)))?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| FlattenError::EmptyWorkbook(path.display().to_string()))?
            .map_err(|e| FlattenError::InputRead(format!("{}: {}", path.display(), e)))?,
    };

    let rows = SheetRows::new(range, column);
    debug!(path = %path.display(), rows = rows.len(), column, "opened input sheet");
    Ok(rows)
}
