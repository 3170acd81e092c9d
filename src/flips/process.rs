use log::debug;
use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use super::args::render;
use super::error::{FResult, FlipsError};
use super::output::FlipsOutput;

/// 启动 flips 并逐行收集 stdout/stderr，直到进程退出
pub fn run(program: &Path, args: &[OsString]) -> FResult {
    debug!("执行: {}", render(program, args));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| FlipsError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    // 两个通道各用一个线程读取，避免某一管道写满导致死锁
    let stdout = child
        .stdout
        .take()
        .map(|pipe| thread::spawn(move || read_lines(pipe)));
    let stderr = child
        .stderr
        .take()
        .map(|pipe| thread::spawn(move || read_lines(pipe)));

    let stdout_lines = join_reader(stdout);
    let stderr_lines = join_reader(stderr);
    let status = child.wait()?;
    let (stdout_lines, stderr_lines) = (stdout_lines?, stderr_lines?);

    debug!("{} 退出: {}", program.display(), status);
    Ok(FlipsOutput::from_status(status, stdout_lines, stderr_lines))
}

type LineReader = thread::JoinHandle<io::Result<Vec<String>>>;

fn join_reader(handle: Option<LineReader>) -> io::Result<Vec<String>> {
    match handle {
        Some(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("输出读取线程异常退出"))),
        None => Ok(Vec::new()),
    }
}

/// 按行读取，非 UTF-8 内容做有损转换，空行保留
fn read_lines<R: Read>(pipe: R) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(pipe);
    let mut lines = Vec::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buffer).into_owned());
    }

    Ok(lines)
}
