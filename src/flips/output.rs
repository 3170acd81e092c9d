use std::process::ExitStatus;

/// 一次 flips 调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipsOutput {
    pub succeeded: bool,
    /// 非零退出码；成功或被信号终止时为 `None`
    pub error_code: Option<i32>,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl FlipsOutput {
    pub fn from_exit_code(exit_code: i32, stdout: Vec<String>, stderr: Vec<String>) -> Self {
        Self {
            succeeded: exit_code == 0,
            error_code: (exit_code != 0).then_some(exit_code),
            stdout,
            stderr,
        }
    }

    pub fn from_status(status: ExitStatus, stdout: Vec<String>, stderr: Vec<String>) -> Self {
        match status.code() {
            Some(code) => Self::from_exit_code(code, stdout, stderr),
            None => Self {
                succeeded: false,
                error_code: None,
                stdout,
                stderr,
            },
        }
    }

    pub fn summary(&self) -> String {
        let status = match (self.succeeded, self.error_code) {
            (true, _) => "成功".to_string(),
            (false, Some(code)) => format!("失败 (退出码 {})", code),
            (false, None) => "失败 (被信号终止)".to_string(),
        };
        format!(
            "{}, 标准输出 {} 行, 标准错误 {} 行",
            status,
            self.stdout.len(),
            self.stderr.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let output = FlipsOutput::from_exit_code(
            0,
            vec!["The patch was applied successfully!".into()],
            vec![],
        );
        assert!(output.succeeded);
        assert_eq!(output.error_code, None);
        assert_eq!(output.stdout.len(), 1);
    }

    #[test]
    fn non_zero_exit_keeps_code() {
        let output = FlipsOutput::from_exit_code(3, vec![], vec!["bad".into()]);
        assert!(!output.succeeded);
        assert_eq!(output.error_code, Some(3));
        assert!(output.summary().contains("退出码 3"));
    }
}
