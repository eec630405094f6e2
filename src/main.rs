use clap::Parser;
use flatten_applied_jobs::{cli, config, convert, error, logging, setup};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("✖ {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (mut config, config_path) = Config::load(cli.config.as_deref())?;
    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Commands::Convert { input, output, file_name, no_timestamp, columns } => {
            println!("📄 flatten-jobs - 応募履歴の変換\n");

            input.apply(&mut config);
            columns.apply(&mut config);
            if let Some(output) = output {
                config.output_file_path = output;
            }
            if let Some(name) = file_name {
                config.output_file_name = name;
            }
            if no_timestamp {
                config.timestamp_output_file_name = false;
            }

            convert::convert(&config)?;

            println!("\n✅ 変換完了");
        }

        Commands::Preview { input, limit } => {
            input.apply(&mut config);

            let placed = convert::preview(&config, limit)?;
            for (placement, record) in &placed {
                println!(
                    "{:<6} #{:<4} {} | {} | {} | {}",
                    placement.destination.sheet_name(),
                    placement.row,
                    record.position,
                    record.company_name,
                    record.location,
                    record.status_text,
                );
            }
            println!("\n{}件", placed.len());
        }

        Commands::Config { show, init, path } => {
            let mut config_path = config_path;
            if init {
                let (saved_path, saved) = setup::run_interactive_init(path.as_deref(), &config)?;
                config = saved;
                config_path = Some(saved_path);
            }

            if show || !init {
                let columns = &config.output_columns_location;
                println!("設定:");
                println!(
                    "  ファイル: {}",
                    config_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "（既定値）".into())
                );
                println!(
                    "  入力: {}",
                    config
                        .input_file_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!(
                    "  入力シート: {}",
                    config.input_sheet_name.as_deref().unwrap_or("（先頭シート）")
                );
                println!("  入力列: {}", config.input_column_number);
                println!("  出力フォルダ: {}", config.output_file_path.display());
                println!("  出力ファイル名: {}", config.output_file_name);
                println!(
                    "  日時プレフィックス: {}",
                    if config.timestamp_output_file_name { "あり" } else { "なし" }
                );
                println!(
                    "  出力列: 会社名={} 職種={} 勤務地={} 状態={}",
                    columns.company, columns.position, columns.location, columns.status
                );
            }
        }
    }

    Ok(())
}
