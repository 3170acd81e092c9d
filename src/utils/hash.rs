use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// 生成文件的摘要信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
}

/// 读取文件大小并计算 SHA256
pub fn digest_file(path: &Path) -> Result<FileDigest> {
    let file = File::open(path).with_context(|| format!("无法打开文件: {:?}", path))?;
    let size = file.metadata()?.len();
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher).with_context(|| format!("无法读取文件: {:?}", path))?;

    Ok(FileDigest {
        path: path.to_path_buf(),
        size,
        sha256: hex::encode(hasher.finalize()),
    })
}
