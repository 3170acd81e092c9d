//! # Flips Wrapper
//!
//! flips (Floating IPS) 命令行补丁工具的封装库
//!
//! ## 功能
//!
//! - 由类型化的参数构造 flips 命令行，创建或应用 IPS/BPS 补丁
//! - 逐行收集 flips 的标准输出与标准错误
//! - 退出码非零时返回带有完整输出的错误
//!
//! 补丁格式与差分算法全部由 flips 自身实现。
//!
//! ## 使用示例
//!
//! ```no_run
//! use flips_wrapper::flips::{ApplyOptions, CreateOptions, FlipsWrapper, PatchType};
//! use std::path::PathBuf;
//!
//! let flips = FlipsWrapper::new("./flips");
//!
//! // 生成补丁
//! let options = CreateOptions {
//!     output_patch: Some(PathBuf::from("hack.bps")),
//!     patch_type: Some(PatchType::Bps),
//!     ..Default::default()
//! };
//! flips.create_patch("clean.sfc", "hack.sfc", &options).unwrap();
//!
//! // 应用补丁
//! let output = flips
//!     .apply_patch("clean.sfc", "hack.bps", &ApplyOptions::default())
//!     .unwrap();
//! for line in &output.stdout {
//!     println!("{}", line);
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod flips;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use flips::{ApplyOptions, CreateOptions, FlipsError, FlipsOutput, FlipsWrapper, PatchType};
