use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// flips 支持的补丁格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatchType {
    Ips,
    Bps,
    BpsDelta,
    BpsLinear,
    #[serde(rename = "bps-delta-moremem")]
    #[value(name = "bps-delta-moremem")]
    BpsDeltaMoreMemory,
}

impl PatchType {
    /// 对应的 flips 命令行参数
    pub fn as_flag(&self) -> &'static str {
        match self {
            PatchType::Ips => "--ips",
            PatchType::Bps => "--bps",
            PatchType::BpsDelta => "--bps-delta",
            PatchType::BpsLinear => "--bps-linear",
            PatchType::BpsDeltaMoreMemory => "--bps-delta-moremem",
        }
    }
}

impl Display for PatchType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}
