use crate::error::{FlattenError, Result};
use flatten_jobs_common::ColumnMapping;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイル名（カレントディレクトリ / ~/.config/flatten-jobs/）
pub const CONFIG_FILE_NAME: &str = "appsettings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// 入力Excel
    pub input_file_path: Option<PathBuf>,
    /// 入力シート名（省略時は先頭シート）
    pub input_sheet_name: Option<String>,
    /// 入力列（1始まり、既定はA列）
    pub input_column_number: u16,
    /// 出力先フォルダ
    pub output_file_path: PathBuf,
    pub output_file_name: String,
    /// ファイル名の先頭に "yyyy-MM-dd-HH-mm-ss-" を付ける
    pub timestamp_output_file_name: bool,
    pub output_columns_location: ColumnMapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file_path: None,
            input_sheet_name: None,
            input_column_number: 1,
            output_file_path: PathBuf::from("."),
            output_file_name: "applied-jobs.xlsx".into(),
            timestamp_output_file_name: true,
            output_columns_location: ColumnMapping::default(),
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// `explicit` 指定時はそのファイルのみ。未指定なら
    /// ./appsettings.json → ~/.config/flatten-jobs/appsettings.json → 既定値 の順。
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(FlattenError::FileNotFound(path.display().to_string()));
            }
            return Ok((Self::load_from(path)?, Some(path.to_path_buf())));
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok((Self::load_from(&local)?, Some(local)));
        }

        if let Ok(user) = Self::user_config_path() {
            if user.exists() {
                return Ok((Self::load_from(&user)?, Some(user)));
            }
        }

        Ok((Self::default(), None))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn user_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FlattenError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("flatten-jobs").join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        self.output_columns_location.validate()?;

        if self.input_column_number == 0 {
            return Err(FlattenError::Config(
                "InputColumnNumber は1以上を指定してください".into(),
            ));
        }
        if self.output_file_name.trim().is_empty() {
            return Err(FlattenError::Config("OutputFileName が空です".into()));
        }
        Ok(())
    }

    /// 入力ファイルのパス（未設定ならエラー）
    pub fn input_path(&self) -> Result<&Path> {
        self.input_file_path
            .as_deref()
            .ok_or(FlattenError::MissingInput)
    }
}
