use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlattenError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力ファイルが指定されていません。`--config` の InputFilePath か引数で指定してください")]
    MissingInput,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力ファイルの読み込みに失敗: {0}")]
    InputRead(String),

    #[error("ワークシートがありません: {0}")]
    EmptyWorkbook(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] flatten_jobs_common::Error),
}

pub type Result<T> = std::result::Result<T, FlattenError>;
