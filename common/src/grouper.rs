//! 行グルーピング
//!
//! スクレイピングしたExcelは1件の応募を連続した6行で表す:
//!
//! ```text
//! 1. 先頭行（アイコン等）
//! 2. 画像行（URL付き画像、データなし）
//! 3. 職種
//! 4. 会社名
//! 5. 勤務地
//! 6. 状態 ("Applied 2w ago" など)
//! ```
//!
//! 先頭行が "This entry has an update" の場合はもう1行読み進めてから
//! 上記の2行目以降を読むため、そのグループは7行になる。
//! マーカーの判定はグループ先頭で1回だけ行う。

use crate::error::{Error, Result};
use crate::types::{JobRecord, Row};
use std::iter::FusedIterator;
use tracing::debug;

/// 更新通知のノイズ行
pub const UPDATE_MARKER: &str = "This entry has an update";

/// 1レコードあたりの行数（ノイズ行なし）
pub const ROWS_PER_RECORD: usize = 6;

/// 行ストリームからJobRecordを1件ずつ取り出す
///
/// 行ソースを所有し、先頭から一度だけ読み進める。
/// 途中で行が尽きた場合は `Error::TruncatedRecord` を返し、以降は何も返さない。
pub struct RecordGrouper<I> {
    rows: I,
    rows_consumed: usize,
    finished: bool,
}

/// 読み込み中のグループの進捗
struct GroupProgress {
    read: usize,
    expected: usize,
}

impl<I> RecordGrouper<I>
where
    I: Iterator<Item = Row>,
{
    pub fn new<R>(rows: R) -> Self
    where
        R: IntoIterator<Item = Row, IntoIter = I>,
    {
        Self {
            rows: rows.into_iter(),
            rows_consumed: 0,
            finished: false,
        }
    }

    /// これまでに読んだ行数（ノイズ行・画像行を含む）
    pub fn rows_consumed(&self) -> usize {
        self.rows_consumed
    }

    /// 次のレコードを読む。入力の終端なら `Ok(None)`
    pub fn next_record(&mut self) -> Result<Option<JobRecord>> {
        if self.finished {
            return Ok(None);
        }

        let first = match self.pull() {
            Some(row) => row,
            None => {
                self.finished = true;
                return Ok(None);
            }
        };

        let mut progress = GroupProgress {
            read: 1,
            expected: ROWS_PER_RECORD,
        };

        if first.as_deref() == Some(UPDATE_MARKER) {
            debug!(row = self.rows_consumed, "skipping update marker");
            progress.expected += 1;
            self.take(&mut progress)?;
        }

        // 画像行
        self.take(&mut progress)?;

        let position = self.take(&mut progress)?;
        let company_name = self.take(&mut progress)?;
        let location = self.take(&mut progress)?;
        let status_text = self.take(&mut progress)?;

        Ok(Some(JobRecord::from_rows(
            position,
            company_name,
            location,
            status_text,
        )))
    }

    fn pull(&mut self) -> Option<Row> {
        let row = self.rows.next()?;
        self.rows_consumed += 1;
        Some(row)
    }

    fn take(&mut self, progress: &mut GroupProgress) -> Result<Row> {
        match self.pull() {
            Some(row) => {
                progress.read += 1;
                Ok(row)
            }
            None => {
                self.finished = true;
                Err(Error::TruncatedRecord {
                    rows_read: progress.read,
                    expected: progress.expected,
                })
            }
        }
    }
}

impl<I> Iterator for RecordGrouper<I>
where
    I: Iterator<Item = Row>,
{
    type Item = Result<JobRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

impl<I> FusedIterator for RecordGrouper<I> where I: Iterator<Item = Row> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Row> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn group(position: &str, company: &str, location: &str, status: &str) -> Vec<Row> {
        rows(&["logo", "image", position, company, location, status])
    }

    #[test]
    fn test_single_record() {
        let input = rows(&["X", "icon", "Backend Engineer", "Acme Corp", "Remote", "Applied 2w ago"]);
        let mut grouper = RecordGrouper::new(input);

        let record = grouper.next_record().unwrap().unwrap();
        assert_eq!(record.position, "Backend Engineer");
        assert_eq!(record.company_name, "Acme Corp");
        assert_eq!(record.location, "Remote");
        assert_eq!(record.status_text, "Applied 2w ago");
        assert_eq!(grouper.rows_consumed(), 6);

        assert!(grouper.next_record().unwrap().is_none());
    }

    #[test]
    fn test_update_marker_consumes_extra_row() {
        let input = rows(&[
            "This entry has an update",
            "icon",
            "icon2",
            "PM",
            "Beta Inc",
            "SF",
            "Application viewed",
        ]);
        let mut grouper = RecordGrouper::new(input);

        let record = grouper.next_record().unwrap().unwrap();
        assert_eq!(record.position, "PM");
        assert_eq!(record.company_name, "Beta Inc");
        assert_eq!(record.location, "SF");
        assert_eq!(record.status_text, "Application viewed");
        assert_eq!(grouper.rows_consumed(), 7);
        assert!(grouper.next_record().unwrap().is_none());
    }

    #[test]
    fn test_many_records_consume_all_rows() {
        let mut input = Vec::new();
        input.extend(group("A", "a", "x", "Applied 1d ago"));
        input.extend(rows(&[UPDATE_MARKER]));
        input.extend(group("B", "b", "y", "Application viewed 2d ago"));
        input.extend(group("C", "c", "z", "Resume downloaded 3d ago"));
        let total = input.len();

        let mut grouper = RecordGrouper::new(input);
        let records: Vec<JobRecord> = grouper.by_ref().collect::<Result<_>>().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].position, "B");
        assert_eq!(records[2].company_name, "c");
        assert_eq!(grouper.rows_consumed(), total);
    }

    #[test]
    fn test_marker_only_checked_at_group_start() {
        // 職種の位置にマーカーがあっても通常の値として扱う
        let input = rows(&["logo", "image", UPDATE_MARKER, "Acme", "Remote", "Applied"]);
        let records: Vec<JobRecord> = RecordGrouper::new(input).collect::<Result<_>>().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position, UPDATE_MARKER);
    }

    #[test]
    fn test_empty_input() {
        let mut grouper = RecordGrouper::new(Vec::<Row>::new());
        assert!(grouper.next().is_none());
        assert_eq!(grouper.rows_consumed(), 0);
    }

    #[test]
    fn test_missing_cells_become_empty() {
        let input = vec![
            Some("logo".to_string()),
            None,
            Some("Engineer".to_string()),
            None,
            None,
            Some("Applied".to_string()),
        ];
        let record = RecordGrouper::new(input).next().unwrap().unwrap();

        assert_eq!(record.position, "Engineer");
        assert_eq!(record.company_name, "");
        assert_eq!(record.location, "");
        assert_eq!(record.status_text, "Applied");
    }

    #[test]
    fn test_truncated_last_record() {
        let mut input = group("A", "a", "x", "Applied");
        input.extend(rows(&["logo", "image", "B"]));

        let mut grouper = RecordGrouper::new(input);
        assert!(grouper.next().unwrap().is_ok());

        let err = grouper.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedRecord { rows_read: 3, expected: 6 }
        ));

        // 部分レコードは出さず、以降は終端
        assert!(grouper.next().is_none());
        assert!(grouper.next().is_none());
    }

    #[test]
    fn test_truncated_after_marker() {
        let input = rows(&[UPDATE_MARKER]);
        let err = RecordGrouper::new(input).next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedRecord { rows_read: 1, expected: 7 }
        ));
    }

    #[test]
    fn test_lazy_pull() {
        let source = std::iter::repeat_with(|| Some("value".to_string()));

        // 無限ストリームでも1件分だけ読む
        let mut grouper = RecordGrouper::new(source);
        grouper.next_record().unwrap();
        assert_eq!(grouper.rows_consumed(), 6);
        grouper.next_record().unwrap();
        assert_eq!(grouper.rows_consumed(), 12);
    }
}
