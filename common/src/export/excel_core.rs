//! Excel生成（共通ライブラリ）
//!
//! Jobs / Viewed の2シートを持つブックをメモリ上に組み立てる。

use super::sheet::SheetWriter;
use crate::error::{Error, Result};
use crate::router::Placement;
use crate::types::{ColumnMapping, Destination, JobRecord};
use rust_xlsxwriter::{Workbook, XlsxError};

fn sheet_error(sheet: &str, e: XlsxError) -> Error {
    Error::Sheet(format!("{}: {}", sheet, e))
}

/// rust_xlsxwriterによるブック出力
pub struct WorkbookWriter {
    workbook: Workbook,
}

impl WorkbookWriter {
    /// Jobs, Viewed の順にシートを作成
    pub fn new() -> Result<Self> {
        let mut workbook = Workbook::new();
        for destination in Destination::ALL {
            let name = destination.sheet_name();
            workbook
                .add_worksheet()
                .set_name(name)
                .map_err(|e| sheet_error(name, e))?;
        }
        Ok(Self { workbook })
    }

    /// xlsxのバイト列を生成
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>> {
        self.workbook
            .save_to_buffer()
            .map_err(|e| Error::Sheet(format!("failed to build workbook: {}", e)))
    }
}

impl SheetWriter for WorkbookWriter {
    fn write_record(
        &mut self,
        placement: Placement,
        record: &JobRecord,
        mapping: &ColumnMapping,
    ) -> Result<()> {
        let name = placement.destination.sheet_name();
        let worksheet = self
            .workbook
            .worksheet_from_name(name)
            .map_err(|e| sheet_error(name, e))?;

        // rust_xlsxwriterは0始まり
        let row = placement.row.saturating_sub(1);
        for (col, value) in mapping.cells(record) {
            // 空セルは書かない（空白のまま）
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(row, col.saturating_sub(1), value)
                .map_err(|e| sheet_error(name, e))?;
        }
        Ok(())
    }
}
