//! 出力先の振り分け
//!
//! 状態テキストの接頭辞でJobs / Viewedを決め、出力先ごとに行番号を払い出す。

use crate::types::{Destination, JobRecord};
use tracing::debug;

/// Viewedシートに振り分ける状態テキストの接頭辞（大文字小文字を区別）
pub const VIEWED_PREFIXES: [&str; 2] = ["Application viewed", "Resume downloaded"];

/// 状態テキストから出力先を判定
pub fn classify(record: &JobRecord) -> Destination {
    if VIEWED_PREFIXES
        .iter()
        .any(|prefix| record.status_text.starts_with(prefix))
    {
        Destination::Viewed
    } else {
        Destination::Applied
    }
}

/// 出力位置（1始まりの行番号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub destination: Destination,
    pub row: u32,
}

/// 出力先ごとの行カウンタ
#[derive(Debug, Clone)]
pub struct RecordRouter {
    next_applied: u32,
    next_viewed: u32,
}

impl Default for RecordRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRouter {
    pub fn new() -> Self {
        Self {
            next_applied: 1,
            next_viewed: 1,
        }
    }

    /// 振り分けて次の行番号を割り当てる
    pub fn place(&mut self, record: &JobRecord) -> Placement {
        let placement = self.assign(classify(record));
        debug!(
            destination = %placement.destination,
            row = placement.row,
            position = %record.position,
            "placed record"
        );
        placement
    }

    /// 出力先の現在の行番号を割り当て、カウンタを1進める
    pub fn assign(&mut self, destination: Destination) -> Placement {
        let counter = match destination {
            Destination::Applied => &mut self.next_applied,
            Destination::Viewed => &mut self.next_viewed,
        };
        let row = *counter;
        *counter += 1;
        Placement { destination, row }
    }

    /// 出力先ごとの件数
    pub fn count(&self, destination: Destination) -> u32 {
        match destination {
            Destination::Applied => self.next_applied - 1,
            Destination::Viewed => self.next_viewed - 1,
        }
    }
}
