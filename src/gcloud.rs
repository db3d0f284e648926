use std::process::{Command, Output};

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Error, Result};

/// Handle on the gcloud executable. Every invocation goes through here.
#[derive(Debug, Clone)]
pub struct Gcloud {
    program: String,
}

impl Gcloud {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.gcloud.clone(),
        }
    }

    /// Run gcloud with `args`, failing on launch errors or a non-zero exit.
    pub fn run(&self, args: &[&str]) -> Result<Captured> {
        let command = self.describe(args);
        debug!("running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| Error::Launch {
                program: self.program.clone(),
                source,
            })?;

        let captured = Captured::from(output);
        debug!(
            "'{}' exited with {} ({} bytes captured)",
            command,
            captured.status,
            captured.combined().len()
        );
        trace!("stderr: {}", String::from_utf8_lossy(&captured.stderr));

        if !captured.status.success() {
            return Err(Error::ExternalTool {
                command,
                status: captured.status,
                output: String::from_utf8_lossy(&captured.combined())
                    .trim_end()
                    .to_string(),
            });
        }
        Ok(captured)
    }

    fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Output of one finished gcloud invocation
#[derive(Debug, Clone)]
pub struct Captured {
    pub status: std::process::ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Captured {
    /// All of stdout followed by all of stderr. The two streams are read
    /// through separate pipes, so writes are not interleaved in time order.
    pub fn combined(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.stdout.len() + self.stderr.len());
        bytes.extend_from_slice(&self.stdout);
        bytes.extend_from_slice(&self.stderr);
        bytes
    }
}

impl From<Output> for Captured {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}
