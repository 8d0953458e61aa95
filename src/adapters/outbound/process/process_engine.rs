use crate::ports::outbound::{InvocationOptions, ScanningEngine};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Time an engine run may take before it is killed
pub const DEFAULT_ENGINE_TIMEOUT: Duration = Duration::from_secs(120);

/// Longest stderr excerpt carried in an invocation error
const MAX_STDERR_EXCERPT: usize = 2048;

/// ProcessScanningEngine adapter running the analysis backend as a child process
///
/// The command line is `program args... <file_type>`. Invocation options are
/// exported as environment variables, the manifest contents are written to
/// stdin, and the JSON report is read from stdout.
pub struct ProcessScanningEngine {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessScanningEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: DEFAULT_ENGINE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn invocation_error(file_type: &str, details: impl Into<String>) -> anyhow::Error {
        AnalysisError::Invocation {
            file_type: file_type.to_string(),
            details: details.into(),
        }
        .into()
    }

    async fn run(
        &self,
        file_type: &str,
        contents: &str,
        options: &InvocationOptions,
    ) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(file_type)
            .envs(options)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Self::invocation_error(
                    file_type,
                    format!("Failed to start '{}': {}", self.program, e),
                )
            })?;

        // stdin is fed while stdout and stderr drain, otherwise an engine that
        // reports before consuming its input blocks on a full pipe.
        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                // The engine may exit without reading its input; a broken pipe
                // surfaces through the exit status instead.
                if let Err(e) = stdin.write_all(contents.as_bytes()).await {
                    tracing::debug!(file_type, error = %e, "engine did not consume manifest contents");
                }
            }
        };

        let ((), output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| {
            Self::invocation_error(file_type, format!("Failed to wait for '{}': {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let excerpt: String = stderr.trim().chars().take(MAX_STDERR_EXCERPT).collect();
            return Err(Self::invocation_error(
                file_type,
                format!("'{}' exited with {}: {}", self.program, output.status, excerpt),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ScanningEngine for ProcessScanningEngine {
    async fn component_analysis(
        &self,
        file_type: &str,
        contents: &str,
        options: &InvocationOptions,
    ) -> Result<Value> {
        tracing::debug!(
            program = %self.program,
            file_type,
            timeout_secs = self.timeout.as_secs(),
            "invoking scanning engine"
        );

        let stdout = tokio::time::timeout(self.timeout, self.run(file_type, contents, options))
            .await
            .map_err(|_| {
                Self::invocation_error(
                    file_type,
                    format!("'{}' timed out after {:?}", self.program, self.timeout),
                )
            })??;

        serde_json::from_slice(&stdout).map_err(|e| {
            Self::invocation_error(file_type, format!("Engine returned invalid JSON: {}", e))
        })
    }
}
