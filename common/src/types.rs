//! 応募履歴の型定義
//!
//! - Row: 入力シートの1セル（1列のみ）
//! - JobRecord: 複数行から復元した1件の応募
//! - Destination: 出力先シート（Jobs / Viewed）
//! - ColumnMapping: 出力列の割り当て

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 入力の1行。セルが空なら `None`
pub type Row = Option<String>;

/// xlsxの最大列数（XFD）
pub const MAX_COLUMN: u16 = 16_384;

/// 1件の応募レコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub position: String,
    pub company_name: String,
    pub location: String,
    /// "Applied 2w ago" などの状態テキスト
    pub status_text: String,
}

impl JobRecord {
    /// 入力行から生成（空セルは空文字）
    pub fn from_rows(position: Row, company_name: Row, location: Row, status_text: Row) -> Self {
        Self {
            position: position.unwrap_or_default(),
            company_name: company_name.unwrap_or_default(),
            location: location.unwrap_or_default(),
            status_text: status_text.unwrap_or_default(),
        }
    }
}

/// 出力先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// 応募済み
    Applied,
    /// 閲覧・レジュメDL済み
    Viewed,
}

impl Destination {
    pub const ALL: [Destination; 2] = [Destination::Applied, Destination::Viewed];

    /// 出力シート名
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Destination::Applied => "Jobs",
            Destination::Viewed => "Viewed",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Applied => write!(f, "applied"),
            Destination::Viewed => write!(f, "viewed"),
        }
    }
}

/// 出力列の割り当て（1始まり）
///
/// 省略した項目は既定値（B / E / G / H）になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    #[serde(rename = "CompanyNameColumnNumber")]
    pub company: u16,
    #[serde(rename = "PositionColumnNumber")]
    pub position: u16,
    #[serde(rename = "LocationColumnNumber")]
    pub location: u16,
    #[serde(rename = "StatusColumnNumber")]
    pub status: u16,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            company: 2,
            position: 5,
            location: 7,
            status: 8,
        }
    }
}

impl ColumnMapping {
    /// 列番号が1以上・上限以内で、互いに重複しないことを確認
    pub fn validate(&self) -> Result<()> {
        let columns = [
            ("company", self.company),
            ("position", self.position),
            ("location", self.location),
            ("status", self.status),
        ];

        for (name, col) in columns {
            if col == 0 || col > MAX_COLUMN {
                return Err(Error::InvalidColumnMapping(format!(
                    "{} column must be between 1 and {}, got {}",
                    name, MAX_COLUMN, col
                )));
            }
        }

        let mut seen = HashSet::new();
        for (name, col) in columns {
            if !seen.insert(col) {
                return Err(Error::InvalidColumnMapping(format!(
                    "{} column {} is assigned more than once",
                    name, col
                )));
            }
        }

        Ok(())
    }

    /// (列番号, 値) の組を返す
    pub fn cells<'a>(&self, record: &'a JobRecord) -> [(u16, &'a str); 4] {
        [
            (self.company, record.company_name.as_str()),
            (self.position, record.position.as_str()),
            (self.location, record.location.as_str()),
            (self.status, record.status_text.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_missing_cells() {
        let record = JobRecord::from_rows(Some("PM".into()), None, Some("SF".into()), None);
        assert_eq!(record.position, "PM");
        assert_eq!(record.company_name, "");
        assert_eq!(record.location, "SF");
        assert_eq!(record.status_text, "");
    }

    #[test]
    fn test_sheet_names() {
        assert_eq!(Destination::Applied.sheet_name(), "Jobs");
        assert_eq!(Destination::Viewed.sheet_name(), "Viewed");
    }

    #[test]
    fn test_default_mapping_is_valid() {
        assert!(ColumnMapping::default().validate().is_ok());
    }

    #[test]
    fn test_mapping_rejects_zero() {
        let mapping = ColumnMapping { company: 0, ..Default::default() };
        let err = mapping.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidColumnMapping(_)));
        assert!(err.to_string().contains("company"));
    }

    #[test]
    fn test_mapping_rejects_out_of_range() {
        let mapping = ColumnMapping { status: MAX_COLUMN + 1, ..Default::default() };
        assert!(mapping.validate().is_err());
    }

    #[test]
    fn test_mapping_rejects_duplicates() {
        let mapping = ColumnMapping { location: 2, ..Default::default() };
        let err = mapping.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_mapping_json_names() {
        let json = r#"{
            "CompanyNameColumnNumber": 1,
            "PositionColumnNumber": 2,
            "LocationColumnNumber": 3,
            "StatusColumnNumber": 4
        }"#;
        let mapping: ColumnMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.company, 1);
        assert_eq!(mapping.status, 4);
    }

    #[test]
    fn test_mapping_missing_status_uses_default() {
        let json = r#"{
            "CompanyNameColumnNumber": 1,
            "PositionColumnNumber": 2,
            "LocationColumnNumber": 3
        }"#;
        let mapping: ColumnMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.location, 3);
        assert_eq!(mapping.status, 8);
    }

    #[test]
    fn test_cells_order() {
        let record = JobRecord::from_rows(
            Some("Backend Engineer".into()),
            Some("Acme Corp".into()),
            Some("Remote".into()),
            Some("Applied 2w ago".into()),
        );
        let cells = ColumnMapping::default().cells(&record);
        assert_eq!(cells[0], (2, "Acme Corp"));
        assert_eq!(cells[1], (5, "Backend Engineer"));
        assert_eq!(cells[2], (7, "Remote"));
        assert_eq!(cells[3], (8, "Applied 2w ago"));
    }
}
