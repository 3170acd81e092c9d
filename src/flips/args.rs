use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::patch_type::PatchType;

/// 清单 (manifest) 输出方式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Manifest {
    #[default]
    None,
    /// `--manifest`，由 flips 决定文件名
    Default,
    /// `--manifest=<path>`
    File(PathBuf),
}

impl Manifest {
    fn to_arg(&self) -> Option<OsString> {
        match self {
            Manifest::None => None,
            Manifest::Default => Some(OsString::from("--manifest")),
            Manifest::File(path) => {
                let mut arg = OsString::from("--manifest=");
                arg.push(path);
                Some(arg)
            }
        }
    }
}

/// 创建补丁的可选参数
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub output_patch: Option<PathBuf>,
    pub exact: bool,
    pub patch_type: Option<PatchType>,
    pub manifest: Manifest,
}

/// 应用补丁的可选参数
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub output_rom: Option<PathBuf>,
    pub exact: bool,
    pub ignore_checksum: bool,
    pub manifest: Manifest,
}

/// `--create [--exact] [类型] [清单] <原始ROM> <修改后ROM> [补丁]`
pub fn create_args(
    clean_rom: &Path,
    modified_rom: &Path,
    options: &CreateOptions,
) -> Vec<OsString> {
    let mut args = vec![OsString::from("--create")];

    if options.exact {
        args.push("--exact".into());
    }
    if let Some(patch_type) = options.patch_type {
        args.push(patch_type.as_flag().into());
    }
    args.extend(options.manifest.to_arg());

    args.push(clean_rom.into());
    args.push(modified_rom.into());
    if let Some(patch) = &options.output_patch {
        args.push(patch.into());
    }

    args
}

/// `--apply [--exact] [--ignore-checksum] [清单] <补丁> <原始ROM> [输出ROM]`
pub fn apply_args(clean_rom: &Path, patch: &Path, options: &ApplyOptions) -> Vec<OsString> {
    let mut args = vec![OsString::from("--apply")];

    if options.exact {
        args.push("--exact".into());
    }
    if options.ignore_checksum {
        args.push("--ignore-checksum".into());
    }
    args.extend(options.manifest.to_arg());

    // flips 要求补丁在前，原始 ROM 在后
    args.push(patch.into());
    args.push(clean_rom.into());
    if let Some(output) = &options.output_rom {
        args.push(output.into());
    }

    args
}

pub fn info_args(patch: &Path) -> Vec<OsString> {
    vec![OsString::from("--info"), patch.into()]
}

/// 把参数列表拼成便于日志阅读的字符串
pub fn render(program: &Path, args: &[OsString]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn create_every_flag_combination() {
        let clean = Path::new("clean.sfc");
        let modified = Path::new("hack.sfc");

        for exact in [false, true] {
            for patch_type in [None, Some(PatchType::BpsDelta)] {
                for output in [None, Some(PathBuf::from("out.bps"))] {
                    let options = CreateOptions {
                        output_patch: output.clone(),
                        exact,
                        patch_type,
                        manifest: Manifest::None,
                    };

                    let mut expected = vec!["--create".to_string()];
                    if exact {
                        expected.push("--exact".into());
                    }
                    if patch_type.is_some() {
                        expected.push("--bps-delta".into());
                    }
                    expected.push("clean.sfc".into());
                    expected.push("hack.sfc".into());
                    if output.is_some() {
                        expected.push("out.bps".into());
                    }

                    assert_eq!(strings(create_args(clean, modified, &options)), expected);
                }
            }
        }
    }

    #[test]
    fn create_passes_every_patch_type() {
        let types = [
            (PatchType::Ips, "--ips"),
            (PatchType::Bps, "--bps"),
            (PatchType::BpsDelta, "--bps-delta"),
            (PatchType::BpsLinear, "--bps-linear"),
            (PatchType::BpsDeltaMoreMemory, "--bps-delta-moremem"),
        ];

        for (patch_type, flag) in types {
            let options = CreateOptions {
                patch_type: Some(patch_type),
                ..Default::default()
            };
            assert_eq!(
                strings(create_args(
                    Path::new("clean.sfc"),
                    Path::new("hack.sfc"),
                    &options
                )),
                vec!["--create", flag, "clean.sfc", "hack.sfc"]
            );
        }
    }

    #[test]
    fn apply_every_flag_combination() {
        let clean = Path::new("clean.sfc");
        let patch = Path::new("hack.bps");

        for exact in [false, true] {
            for ignore_checksum in [false, true] {
                for output in [None, Some(PathBuf::from("patched.sfc"))] {
                    let options = ApplyOptions {
                        output_rom: output.clone(),
                        exact,
                        ignore_checksum,
                        manifest: Manifest::None,
                    };

                    let mut expected = vec!["--apply".to_string()];
                    if exact {
                        expected.push("--exact".into());
                    }
                    if ignore_checksum {
                        expected.push("--ignore-checksum".into());
                    }
                    expected.push("hack.bps".into());
                    expected.push("clean.sfc".into());
                    if output.is_some() {
                        expected.push("patched.sfc".into());
                    }

                    assert_eq!(strings(apply_args(clean, patch, &options)), expected);
                }
            }
        }
    }

    #[test]
    fn apply_puts_patch_before_clean_rom() {
        let options = ApplyOptions {
            output_rom: Some(PathBuf::from("patched.sfc")),
            exact: true,
            ignore_checksum: true,
            manifest: Manifest::None,
        };

        assert_eq!(
            strings(apply_args(
                Path::new("clean.sfc"),
                Path::new("hack.bps"),
                &options
            )),
            vec![
                "--apply",
                "--exact",
                "--ignore-checksum",
                "hack.bps",
                "clean.sfc",
                "patched.sfc"
            ]
        );
    }

    #[test]
    fn apply_minimal() {
        assert_eq!(
            strings(apply_args(
                Path::new("clean.sfc"),
                Path::new("hack.ips"),
                &ApplyOptions::default()
            )),
            vec!["--apply", "hack.ips", "clean.sfc"]
        );

        let options = ApplyOptions {
            ignore_checksum: true,
            ..Default::default()
        };
        assert_eq!(
            strings(apply_args(
                Path::new("clean.sfc"),
                Path::new("hack.ips"),
                &options
            )),
            vec!["--apply", "--ignore-checksum", "hack.ips", "clean.sfc"]
        );
    }

    #[test]
    fn manifest_flags() {
        let options = CreateOptions {
            manifest: Manifest::Default,
            patch_type: Some(PatchType::Bps),
            ..Default::default()
        };
        assert_eq!(
            strings(create_args(Path::new("a"), Path::new("b"), &options)),
            vec!["--create", "--bps", "--manifest", "a", "b"]
        );

        let options = ApplyOptions {
            manifest: Manifest::File(PathBuf::from("rom.xml")),
            ..Default::default()
        };
        assert_eq!(
            strings(apply_args(Path::new("a"), Path::new("p"), &options)),
            vec!["--apply", "--manifest=rom.xml", "p", "a"]
        );
    }

    #[test]
    fn info_and_render() {
        let args = info_args(Path::new("hack.bps"));
        assert_eq!(
            render(Path::new("./flips"), &args),
            "./flips --info hack.bps"
        );
    }
}
