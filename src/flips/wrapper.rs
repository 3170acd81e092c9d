use log::info;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use super::args::{ApplyOptions, CreateOptions, apply_args, create_args, info_args};
use super::error::{FResult, FlipsError};
use super::process::run;

/// flips 命令行工具的封装
#[derive(Debug, Clone)]
pub struct FlipsWrapper {
    flips_path: PathBuf,
}

impl FlipsWrapper {
    pub fn new<P>(flips_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            flips_path: flips_path.into(),
        }
    }

    pub fn flips_path(&self) -> &Path {
        &self.flips_path
    }

    /// 由原始 ROM 和修改后的 ROM 生成补丁
    ///
    /// 未指定 `output_patch` 时由 flips 决定补丁文件名。
    /// 退出码非零时返回 [`FlipsError::CreateFailed`]，其中带有完整输出。
    pub fn create_patch<C, M>(
        &self,
        clean_rom: C,
        modified_rom: M,
        options: &CreateOptions,
    ) -> FResult
    where
        C: AsRef<Path>,
        M: AsRef<Path>,
    {
        let (clean_rom, modified_rom) = (clean_rom.as_ref(), modified_rom.as_ref());
        self.ensure_flips()?;

        let output = run(&self.flips_path, &create_args(clean_rom, modified_rom, options))?;
        if !output.succeeded {
            let details = format!(
                "原始 ROM: {}\n修改后 ROM: {}\n输出补丁: {}\n精确模式: {}\n补丁类型: {}\n",
                clean_rom.display(),
                modified_rom.display(),
                or_dash(options.output_patch.as_ref().map(|p| p.display())),
                options.exact,
                or_dash(options.patch_type),
            );
            return Err(FlipsError::CreateFailed { details, output });
        }

        match &options.output_patch {
            Some(patch) => info!(
                "补丁已创建: {} ({} -> {})",
                patch.display(),
                clean_rom.display(),
                modified_rom.display()
            ),
            None => info!("补丁已创建: {} -> {}", clean_rom.display(), modified_rom.display()),
        }
        Ok(output)
    }

    /// 将补丁应用到原始 ROM
    ///
    /// 退出码非零时返回 [`FlipsError::ApplyFailed`]。
    pub fn apply_patch<C, P>(&self, clean_rom: C, patch: P, options: &ApplyOptions) -> FResult
    where
        C: AsRef<Path>,
        P: AsRef<Path>,
    {
        let (clean_rom, patch) = (clean_rom.as_ref(), patch.as_ref());
        self.ensure_flips()?;

        let output = run(&self.flips_path, &apply_args(clean_rom, patch, options))?;
        if !output.succeeded {
            let details = format!(
                "原始 ROM: {}\n输出 ROM: {}\n补丁: {}\n精确模式: {}\n忽略校验和: {}\n",
                clean_rom.display(),
                or_dash(options.output_rom.as_ref().map(|p| p.display())),
                patch.display(),
                options.exact,
                options.ignore_checksum,
            );
            return Err(FlipsError::ApplyFailed { details, output });
        }

        info!("补丁已应用: {}", patch.display());
        Ok(output)
    }

    /// 读取 BPS 补丁中记录的源/目标信息
    pub fn patch_info<P: AsRef<Path>>(&self, patch: P) -> FResult {
        let patch = patch.as_ref();
        self.ensure_flips()?;

        let output = run(&self.flips_path, &info_args(patch))?;
        if !output.succeeded {
            return Err(FlipsError::InfoFailed {
                patch: patch.to_path_buf(),
                output,
            });
        }
        Ok(output)
    }

    fn ensure_flips(&self) -> Result<(), FlipsError> {
        if self.flips_path.is_file() {
            Ok(())
        } else {
            Err(FlipsError::FlipsMissing {
                flips_path: self.flips_path.clone(),
            })
        }
    }
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
