use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::flips::{ApplyOptions, FResult, FlipsWrapper};
use crate::utils::{collect_patches, patched_rom_name};

/// 批量应用中单个补丁的结果
#[derive(Debug)]
pub struct BatchEntry {
    pub patch: PathBuf,
    pub output_rom: PathBuf,
    pub result: FResult,
}

impl BatchEntry {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// 将目录下所有补丁依次应用到原始 ROM，输出到 `output_dir`
///
/// 单个补丁失败不会中断其余补丁，失败信息保存在对应的 [`BatchEntry`] 中。
pub fn apply_all(
    wrapper: &FlipsWrapper,
    clean_rom: &Path,
    patch_dir: &Path,
    output_dir: &Path,
    options: &ApplyOptions,
) -> Result<Vec<BatchEntry>> {
    let patches = collect_patches(patch_dir)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("无法创建输出目录: {:?}", output_dir))?;

    let mut entries = Vec::with_capacity(patches.len());
    for patch in patches {
        let output_rom = output_dir.join(patched_rom_name(patch_dir, &patch, clean_rom));
        if let Some(parent) = output_rom.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建输出目录: {:?}", parent))?;
        }
        let entry_options = ApplyOptions {
            output_rom: Some(output_rom.clone()),
            ..options.clone()
        };

        let result = wrapper.apply_patch(clean_rom, &patch, &entry_options);
        if let Err(err) = &result {
            warn!("{}: {}", patch.display(), err);
        }

        entries.push(BatchEntry {
            patch,
            output_rom,
            result,
        });
    }

    Ok(entries)
}

/// 统计批量结果
pub fn summary(entries: &[BatchEntry]) -> String {
    let ok = entries.iter().filter(|e| e.succeeded()).count();
    format!(
        "共 {} 个补丁, 成功: {}, 失败: {}",
        entries.len(),
        ok,
        entries.len() - ok
    )
}
