use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::flips::PatchType;

/// 默认配置文件名，在当前目录查找
pub const CONFIG_FILE_NAME: &str = "flips-wrapper.toml";

/// 覆盖 flips 路径的环境变量
pub const FLIPS_PATH_ENV: &str = "FLIPS_PATH";

/// `flips-wrapper.toml` 的内容，所有字段都可省略
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub flips_path: Option<PathBuf>,
    pub clean_rom: Option<PathBuf>,
    pub patch_type: Option<PatchType>,
    pub exact: bool,
    pub ignore_checksum: bool,
}

impl Config {
    /// 读取配置文件
    ///
    /// 显式给出的路径必须存在；未给出时尝试当前目录下的默认文件，不存在则使用默认配置。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("配置文件不存在: {:?}", path);
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("无法读取配置文件: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("无法解析配置文件: {:?}", path))
    }

    /// flips 路径优先级: 命令行 > 环境变量 > 配置文件 > 当前目录下的 flips
    pub fn resolve_flips_path(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(path) = std::env::var_os(FLIPS_PATH_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        self.flips_path.clone().unwrap_or_else(default_flips_path)
    }

    /// 命令行优先，其次是配置文件中的 `clean_rom`
    pub fn resolve_clean_rom(&self, cli_value: Option<&Path>) -> Result<PathBuf> {
        cli_value
            .map(Path::to_path_buf)
            .or_else(|| self.clean_rom.clone())
            .context("未指定原始 ROM，请在命令行或配置文件 clean_rom 中给出")
    }
}

pub fn default_flips_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("flips.exe")
    } else {
        PathBuf::from("./flips")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            flips_path = "/opt/flips/flips"
            clean_rom = "roms/clean.sfc"
            patch_type = "bps-delta"
            exact = true
            "#,
        )
        .unwrap();

        assert_eq!(config.flips_path, Some(PathBuf::from("/opt/flips/flips")));
        assert_eq!(config.clean_rom, Some(PathBuf::from("roms/clean.sfc")));
        assert_eq!(config.patch_type, Some(PatchType::BpsDelta));
        assert!(config.exact);
        assert!(!config.ignore_checksum);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("flip_path = \"typo\"").is_err());
    }

    #[test]
    fn cli_overrides_everything() {
        let config = Config {
            flips_path: Some(PathBuf::from("from-file")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_flips_path(Some(Path::new("from-cli"))),
            PathBuf::from("from-cli")
        );
    }

    #[test]
    fn clean_rom_falls_back_to_config() {
        let config = Config {
            clean_rom: Some(PathBuf::from("clean.sfc")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_clean_rom(None).unwrap(),
            PathBuf::from("clean.sfc")
        );
        assert_eq!(
            config.resolve_clean_rom(Some(Path::new("other.sfc"))).unwrap(),
            PathBuf::from("other.sfc")
        );
        assert!(Config::default().resolve_clean_rom(None).is_err());
    }
}
