use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::Path;

use flips_wrapper::batch::{apply_all, summary};
use flips_wrapper::cli::{Cli, Commands};
use flips_wrapper::config::Config;
use flips_wrapper::flips::{ApplyOptions, CreateOptions, FlipsError, FlipsOutput, FlipsWrapper};
use flips_wrapper::utils::digest_file;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let config = Config::load(cli.config.as_deref())?;
    let flips = FlipsWrapper::new(config.resolve_flips_path(cli.flips.as_deref()));

    match cli.command {
        Commands::Create {
            clean_rom,
            modified_rom,
            output,
            patch_type,
            exact,
            manifest,
        } => {
            if !clean_rom.exists() {
                return Err(anyhow!("原始 ROM 不存在: {:?}", clean_rom));
            }
            if !modified_rom.exists() {
                return Err(anyhow!("修改后的 ROM 不存在: {:?}", modified_rom));
            }
            let options = CreateOptions {
                output_patch: output,
                exact: exact || config.exact,
                patch_type: patch_type.or(config.patch_type),
                manifest: manifest.to_manifest(),
            };

            println!("正在创建补丁...");
            let result = flips.create_patch(&clean_rom, &modified_rom, &options);
            report(&result);
            result?;
            if let Some(patch) = &options.output_patch {
                show_digest(patch)?;
            }
        }
        Commands::Apply {
            patch,
            clean_rom,
            output,
            exact,
            ignore_checksum,
            manifest,
        } => {
            let clean_rom = config.resolve_clean_rom(clean_rom.as_deref())?;
            if !clean_rom.exists() {
                return Err(anyhow!("原始 ROM 不存在: {:?}", clean_rom));
            }
            if !patch.exists() {
                return Err(anyhow!("补丁不存在: {:?}", patch));
            }
            let options = ApplyOptions {
                output_rom: output,
                exact: exact || config.exact,
                ignore_checksum: ignore_checksum || config.ignore_checksum,
                manifest: manifest.to_manifest(),
            };

            println!("正在应用补丁...");
            let result = flips.apply_patch(&clean_rom, &patch, &options);
            report(&result);
            result?;
            if let Some(rom) = &options.output_rom {
                show_digest(rom)?;
            }
        }
        Commands::Info { patch } => {
            if !patch.exists() {
                return Err(anyhow!("补丁不存在: {:?}", patch));
            }
            let result = flips.patch_info(&patch);
            report(&result);
            result?;
        }
        Commands::Batch {
            patch_dir,
            clean_rom,
            output,
            exact,
            ignore_checksum,
        } => {
            let clean_rom = config.resolve_clean_rom(clean_rom.as_deref())?;
            if !clean_rom.exists() {
                return Err(anyhow!("原始 ROM 不存在: {:?}", clean_rom));
            }
            if !patch_dir.is_dir() {
                return Err(anyhow!("补丁目录不存在: {:?}", patch_dir));
            }
            let options = ApplyOptions {
                exact: exact || config.exact,
                ignore_checksum: ignore_checksum || config.ignore_checksum,
                ..Default::default()
            };

            println!("正在批量应用补丁...");
            let entries = apply_all(&flips, &clean_rom, &patch_dir, &output, &options)?;
            for entry in &entries {
                let symbol = if entry.succeeded() { "+" } else { "!" };
                println!(
                    "  {} {} -> {}",
                    symbol,
                    entry.patch.display(),
                    entry.output_rom.display()
                );
            }
            println!("{}", summary(&entries));

            if entries.iter().any(|e| !e.succeeded()) {
                return Err(anyhow!("部分补丁应用失败"));
            }
        }
    }

    Ok(())
}

/// 回显 flips 的输出
fn report(result: &Result<FlipsOutput, FlipsError>) {
    let output = match result {
        Ok(output) => output,
        Err(err) => match err.output() {
            Some(output) => output,
            None => return,
        },
    };

    for line in &output.stdout {
        println!("  | {}", line);
    }
    for line in &output.stderr {
        eprintln!("  ! {}", line);
    }
}

fn show_digest(path: &Path) -> Result<()> {
    if path.exists() {
        let digest = digest_file(path)?;
        println!("已生成: {}", digest.path.display());
        println!("  大小: {} 字节", digest.size);
        println!("  SHA256: {}", digest.sha256);
    }
    Ok(())
}
