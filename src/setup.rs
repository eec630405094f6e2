//! 対話式の設定ファイル作成

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{FlattenError, Result};
use dialoguer::Input;
use flatten_jobs_common::ColumnMapping;
use std::path::{Path, PathBuf};

/// 対話で設定を作成して保存。作成先のパスと保存後の設定を返す
pub fn run_interactive_init(path: Option<&Path>, current: &Config) -> Result<(PathBuf, Config)> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    println!("⚙ 設定ファイルを作成: {}", path.display());
    println!("---");

    let input = prompt_text(
        "入力Excel（空欄で未設定）",
        current
            .input_file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    )?;
    let output_dir = prompt_text("出力フォルダ", current.output_file_path.display().to_string())?;
    let output_name = prompt_text("出力ファイル名", current.output_file_name.clone())?;

    let columns = &current.output_columns_location;
    let mapping = ColumnMapping {
        company: prompt_column("会社名の列", columns.company)?,
        position: prompt_column("職種の列", columns.position)?,
        location: prompt_column("勤務地の列", columns.location)?,
        status: prompt_column("状態の列", columns.status)?,
    };

    let config = Config {
        input_file_path: (!input.trim().is_empty()).then(|| PathBuf::from(input.trim())),
        output_file_path: PathBuf::from(output_dir.trim()),
        output_file_name: output_name.trim().to_string(),
        output_columns_location: mapping,
        ..current.clone()
    };
    let saved = save_and_reload(&config, &path)?;

    println!("---");
    println!("✔ 設定を保存しました: {}", path.display());
    Ok((path, saved))
}

/// 検証して保存し、保存したファイルから読み直す
pub fn save_and_reload(config: &Config, path: &Path) -> Result<Config> {
    config.validate()?;
    config.save(path)?;
    Config::load_from(path)
}

fn prompt_text(prompt: &str, default: String) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| FlattenError::Prompt(e.to_string()))
}

fn prompt_column(prompt: &str, default: u16) -> Result<u16> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|col: &u16| -> std::result::Result<(), &str> {
            if *col >= 1 {
                Ok(())
            } else {
                Err("1以上を入力してください")
            }
        })
        .interact_text()
        .map_err(|e| FlattenError::Prompt(e.to_string()))
}
