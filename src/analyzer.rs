//! External analyzer invocation.
//! The analyzer is an opaque collaborator: a program that takes one file
//! path argument and prints whatever it wants. We capture its console output
//! and hand it back as plain text.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::errors::AnalyzerError;

/// Run an external analyzer against a file and return its captured output.
pub trait Analyzer {
    fn analyze(&self, file: &Path) -> Result<String, AnalyzerError>;
}

/// Analyzer backed by an external program, e.g. `python3 analyze.py`.
/// The file under analysis is appended as the final argument.
#[derive(Debug, Clone)]
pub struct ScriptAnalyzer {
    program: OsString,
    args: Vec<OsString>,
}

impl ScriptAnalyzer {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a leading argument (before the file path), builder-style.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Analyzer for ScriptAnalyzer {
    /// Spawn the program, wait for it, and return the combined console
    /// output (stdout first, then stderr; the two streams are captured
    /// separately by the host, so they are not interleaved).
    ///
    /// A program that cannot be spawned yields [`AnalyzerError::Launch`]; one
    /// that exits non-zero yields [`AnalyzerError::Exited`] carrying the
    /// transcript captured so far.
    fn analyze(&self, file: &Path) -> Result<String, AnalyzerError> {
        debug!(program = %self.program_name(), file = %file.display(), "Launching analyzer");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| AnalyzerError::Launch {
                program: self.program_name(),
                source,
            })?;

        let mut transcript = String::from_utf8_lossy(&output.stdout).into_owned();
        transcript.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(AnalyzerError::Exited {
                program: self.program_name(),
                status: output.status,
                transcript,
            });
        }
        Ok(transcript)
    }
}
