//! 出力シートへの書き込み契約

use crate::error::Result;
use crate::router::Placement;
use crate::types::{ColumnMapping, JobRecord};

/// 振り分け済みレコードをシートに書き込む
///
/// 実装は `placement.destination` のシート（Jobs / Viewed）の
/// `placement.row` 行目に、`mapping` の各列へ4項目を配置する。
/// 行・列はいずれも1始まり。
pub trait SheetWriter {
    fn write_record(
        &mut self,
        placement: Placement,
        record: &JobRecord,
        mapping: &ColumnMapping,
    ) -> Result<()>;
}

/// 書き込み内容をメモリに保持するだけの実装（プレビュー・テスト用）
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub placed: Vec<(Placement, JobRecord)>,
}

impl SheetWriter for RecordingWriter {
    fn write_record(
        &mut self,
        placement: Placement,
        record: &JobRecord,
        _mapping: &ColumnMapping,
    ) -> Result<()> {
        self.placed.push((placement, record.clone()));
        Ok(())
    }
}
