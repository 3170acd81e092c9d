use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::output::FlipsOutput;

pub type FResult = Result<FlipsOutput, FlipsError>;

#[derive(Debug, Error)]
pub enum FlipsError {
    #[error("找不到 flips 可执行文件: {}", flips_path.display())]
    FlipsMissing { flips_path: PathBuf },

    #[error("无法启动 {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("读取 flips 输出失败")]
    Io(#[from] io::Error),

    #[error("创建补丁失败:\n{details}{}", output.summary())]
    CreateFailed { details: String, output: FlipsOutput },

    #[error("应用补丁失败:\n{details}{}", output.summary())]
    ApplyFailed { details: String, output: FlipsOutput },

    #[error("读取补丁信息失败: {}\n{}", patch.display(), output.summary())]
    InfoFailed { patch: PathBuf, output: FlipsOutput },
}

impl FlipsError {
    /// 失败时 flips 的完整输出
    pub fn output(&self) -> Option<&FlipsOutput> {
        match self {
            FlipsError::CreateFailed { output, .. }
            | FlipsError::ApplyFailed { output, .. }
            | FlipsError::InfoFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}
