//! 行ストリーム → レコード → シート の一括処理

use crate::error::Result;
use crate::export::SheetWriter;
use crate::grouper::RecordGrouper;
use crate::router::RecordRouter;
use crate::types::{ColumnMapping, Destination, Row};
use tracing::info;

/// 処理結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// 読んだ入力行数
    pub rows_read: usize,
    pub applied: u32,
    pub viewed: u32,
}

impl FlattenStats {
    pub fn records(&self) -> u32 {
        self.applied + self.viewed
    }
}

/// 全行を読み、振り分けた各レコードを `writer` に書き込む
///
/// 途中でエラーになった場合はそのまま返す（部分レコードは書かない）。
pub fn flatten<R, W>(rows: R, mapping: &ColumnMapping, writer: &mut W) -> Result<FlattenStats>
where
    R: IntoIterator<Item = Row>,
    W: SheetWriter + ?Sized,
{
    mapping.validate()?;

    let mut grouper = RecordGrouper::new(rows);
    let mut router = RecordRouter::new();

    while let Some(record) = grouper.next_record()? {
        let placement = router.place(&record);
        writer.write_record(placement, &record, mapping)?;
    }

    let stats = FlattenStats {
        rows_read: grouper.rows_consumed(),
        applied: router.count(Destination::Applied),
        viewed: router.count(Destination::Viewed),
    };
    info!(
        rows = stats.rows_read,
        applied = stats.applied,
        viewed = stats.viewed,
        "flatten finished"
    );
    Ok(stats)
}
