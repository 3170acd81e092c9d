use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::flips::{Manifest, PatchType};

/// flips 补丁工具的命令行封装
#[derive(Parser)]
#[command(name = "fw")]
#[command(about = "flips (IPS/BPS) 补丁工具的命令行封装", long_about = None)]
pub struct Cli {
    /// flips 可执行文件路径
    #[arg(long, global = true)]
    pub flips: Option<PathBuf>,

    /// 配置文件路径 (默认: ./flips-wrapper.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出更多日志 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `-v` 次数对应的日志级别，未指定时返回 `None` (沿用 RUST_LOG 或默认的 warn)
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 由原始 ROM 和修改后的 ROM 生成补丁
    Create {
        /// 原始 ROM
        clean_rom: PathBuf,
        /// 修改后的 ROM
        modified_rom: PathBuf,
        /// 输出补丁路径
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// 补丁格式
        #[arg(short = 't', long = "type", value_enum)]
        patch_type: Option<PatchType>,
        /// 精确模式
        #[arg(long)]
        exact: bool,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    /// 将补丁应用到原始 ROM
    Apply {
        /// 补丁文件
        patch: PathBuf,
        /// 原始 ROM (默认取配置文件中的 clean_rom)
        clean_rom: Option<PathBuf>,
        /// 输出 ROM 路径
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// 精确模式
        #[arg(long)]
        exact: bool,
        /// 忽略校验和
        #[arg(long)]
        ignore_checksum: bool,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    /// 显示 BPS 补丁中记录的信息
    Info {
        /// 补丁文件
        patch: PathBuf,
    },
    /// 将目录下的所有补丁依次应用到原始 ROM
    Batch {
        /// 补丁所在目录
        patch_dir: PathBuf,
        /// 原始 ROM (默认取配置文件中的 clean_rom)
        clean_rom: Option<PathBuf>,
        /// 输出目录
        #[arg(short, long)]
        output: PathBuf,
        /// 精确模式
        #[arg(long)]
        exact: bool,
        /// 忽略校验和
        #[arg(long)]
        ignore_checksum: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// 生成或校验清单文件，可选指定文件名 (--manifest=FILE)
    #[arg(
        short = 'm',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true
    )]
    pub manifest: Option<Option<PathBuf>>,
}

impl ManifestArgs {
    pub fn to_manifest(&self) -> Manifest {
        match &self.manifest {
            None => Manifest::None,
            Some(None) => Manifest::Default,
            Some(Some(path)) => Manifest::File(path.clone()),
        }
    }
}
