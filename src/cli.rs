use clap::{Args, Parser, Subcommand};
use crate::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatten-jobs")]
#[command(about = "LinkedInの応募履歴（スクレイピングExcel）を1行1件の表に変換するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時は ./appsettings.json）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 応募履歴ExcelをJobs / Viewedの2シートに変換
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// 出力フォルダ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力ファイル名
        #[arg(long)]
        file_name: Option<String>,

        /// ファイル名に日時を付けない
        #[arg(long)]
        no_timestamp: bool,

        #[command(flatten)]
        columns: ColumnArgs,
    },

    /// 変換結果を表示のみ（ファイルは出力しない）
    Preview {
        #[command(flatten)]
        input: InputArgs,

        /// 表示する件数
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 設定を表示/作成
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 対話的に設定ファイルを作成
        #[arg(long)]
        init: bool,

        /// 作成先（省略時は ./appsettings.json）
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// 入力指定
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// 入力Excel（省略時は設定の InputFilePath）
    pub input: Option<PathBuf>,

    /// 入力シート名（省略時は先頭シート）
    #[arg(long)]
    pub sheet: Option<String>,

    /// 入力列番号（1始まり）
    #[arg(long)]
    pub input_column: Option<u16>,
}

/// 出力列の上書き（1始まり）
#[derive(Args, Clone, Debug, Default)]
pub struct ColumnArgs {
    /// 会社名の列
    #[arg(long)]
    pub company_col: Option<u16>,

    /// 職種の列
    #[arg(long)]
    pub position_col: Option<u16>,

    /// 勤務地の列
    #[arg(long)]
    pub location_col: Option<u16>,

    /// 状態の列
    #[arg(long)]
    pub status_col: Option<u16>,
}

impl InputArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input_file_path = Some(input.clone());
        }
        if let Some(sheet) = &self.sheet {
            config.input_sheet_name = Some(sheet.clone());
        }
        if let Some(col) = self.input_column {
            config.input_column_number = col;
        }
    }
}

impl ColumnArgs {
    pub fn apply(&self, config: &mut Config) {
        let mapping = &mut config.output_columns_location;
        if let Some(col) = self.company_col {
            mapping.company = col;
        }
        if let Some(col) = self.position_col {
            mapping.position = col;
        }
        if let Some(col) = self.location_col {
            mapping.location = col;
        }
        if let Some(col) = self.status_col {
            mapping.status = col;
        }
    }
}
