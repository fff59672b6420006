//! 程序执行服务 - 业务能力层
//!
//! 只负责"执行一段程序并取回输出"能力

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppResult, SolverError};

/// 程序执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOutput {
    pub stdout: String,
    pub stderr: String,
}

/// 程序执行能力
#[async_trait]
pub trait ProgramRunner: Send + Sync {
    /// 执行程序；非零退出码视为失败
    async fn run(&self, program: &str) -> AppResult<ProgramOutput>;
}

/// 通过 `<interpreter> -c <program>` 执行程序
pub struct PythonRunner {
    interpreter: String,
    timeout: Option<Duration>,
}

impl PythonRunner {
    pub fn new(interpreter: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            interpreter: interpreter.into(),
            timeout,
        }
    }

    /// 根据配置创建，`program_timeout_secs == 0` 表示不限时
    pub fn from_config(config: &Config) -> Self {
        let timeout = (config.program_timeout_secs > 0)
            .then(|| Duration::from_secs(config.program_timeout_secs));
        Self::new(config.python_bin.clone(), timeout)
    }
}

#[async_trait]
impl ProgramRunner for PythonRunner {
    async fn run(&self, program: &str) -> AppResult<ProgramOutput> {
        debug!("使用 {} 执行程序 ({} 字符)", self.interpreter, program.len());

        let mut command = Command::new(&self.interpreter);
        command
            .arg("-c")
            .arg(program)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        let child = command.output();

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child)
                .await
                .map_err(|_| SolverError::ProgramTimedOut {
                    seconds: limit.as_secs(),
                })?,
            None => child.await,
        }
        .map_err(|source| SolverError::SpawnFailed {
            interpreter: self.interpreter.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(SolverError::ProgramFailed {
                code: output.status.code(),
                stderr,
            }
            .into());
        }

        Ok(ProgramOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let runner = PythonRunner::new("sh", None);

        let output = runner.run("echo 233168").await.unwrap();

        assert_eq!(output.stdout.trim(), "233168");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let runner = PythonRunner::new("sh", None);

        let err = runner.run("echo boom >&2; exit 3").await.unwrap_err();

        match err {
            AppError::Solver(SolverError::ProgramFailed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let runner = PythonRunner::new("sh", Some(Duration::from_millis(100)));

        let err = runner.run("sleep 5").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Solver(SolverError::ProgramTimedOut { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_interpreter() {
        let runner = PythonRunner::new("no-such-interpreter-for-tests", None);

        let err = runner.run("print(1)").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Solver(SolverError::SpawnFailed { .. })
        ));
    }

    #[test]
    fn test_from_config_timeout() {
        let config = Config {
            program_timeout_secs: 0,
            ..Config::default()
        };
        assert!(PythonRunner::from_config(&config).timeout.is_none());

        let runner = PythonRunner::from_config(&Config::default());
        assert_eq!(runner.timeout, Some(Duration::from_secs(30)));
        assert_eq!(runner.interpreter, "python3");
    }
}
