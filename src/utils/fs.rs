use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PATCH_EXTENSIONS: &[&str] = &["ips", "bps"];

/// 是否为 flips 能处理的补丁文件 (按扩展名判断)
pub fn is_patch_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PATCH_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// 递归收集目录下所有补丁文件，按路径排序
pub fn collect_patches(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut patches = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("无法遍历目录: {:?}", dir))?;
        if entry.file_type().is_file() && is_patch_file(entry.path()) {
            patches.push(entry.into_path());
        }
    }

    patches.sort();
    Ok(patches)
}

/// 批量模式下的输出路径: 保留补丁相对 `patch_dir` 的子目录，
/// 文件名为补丁文件名 + 原始 ROM 的扩展名
pub fn patched_rom_name(patch_dir: &Path, patch: &Path, clean_rom: &Path) -> PathBuf {
    let relative = patch.strip_prefix(patch_dir).unwrap_or(patch);

    let mut name = relative
        .file_stem()
        .unwrap_or(relative.as_os_str())
        .to_os_string();
    if let Some(ext) = clean_rom.extension() {
        name.push(".");
        name.push(ext);
    }

    match relative.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
