//! CLI definition and parsing.
//! One subcommand per filesystem operation plus `analyze`; global flags
//! control logging only. There is no config file surface: everything the
//! demo does is spelled out on the command line.

use clap::{Parser, Subcommand, ValueHint};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// CLI wrapper for the relocate library.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Filesystem relocation helpers: create, delete, move, batch move, analyze"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a directory, including any missing parents.
    CreateDir {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },

    /// Delete a directory and everything beneath it. Missing path is not an error.
    RemoveDir {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },

    /// Move a file or directory to a new path (pure rename, no copy fallback).
    Move {
        #[arg(value_hint = ValueHint::AnyPath)]
        source: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dest: PathBuf,
    },

    /// Move several paths into a target directory, stopping at the first failure.
    BatchMove {
        /// Paths to move, in order. Each destination is the target directory
        /// joined with the path as given.
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,

        /// Target directory (must already exist).
        #[arg(long, short = 't', value_name = "DIR", value_hint = ValueHint::DirPath)]
        into: PathBuf,
    },

    /// Write a file (empty unless --contents is given), truncating any existing one.
    CreateFile {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,

        #[arg(long, help = "Contents to write; empty file if omitted")]
        contents: Option<String>,
    },

    /// Delete a single file.
    RemoveFile {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Print a file's contents.
    Cat {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// List a directory, directories first.
    List {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },

    /// Run the external analyzer on a file and print its combined output.
    Analyze {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Interpreter or binary to run.
        #[arg(long, default_value = "python3", help = "Analyzer program to run")]
        program: String,

        /// Script passed to the program ahead of the file path.
        #[arg(
            long,
            default_value = "analyze.py",
            value_hint = ValueHint::FilePath,
            help = "Analyzer script given to the program"
        )]
        script: PathBuf,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
