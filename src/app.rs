//! Application orchestrator.
//! Initializes logging, dispatches the subcommand to the library, and turns
//! failures into console messages. Failures never produce a non-zero exit:
//! the demo reports and terminates gracefully, the library's typed errors
//! are the real contract.

use anyhow::Result;
use relocate::output as out;
use relocate::{Analyzer, AnalyzerError, EntryKind, RelocateError, ScriptAnalyzer, fs_ops};
use tracing::{debug, error};

use crate::cli::{Args, Command};
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    init_tracing(&args.effective_log_level(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting relocate: {:?}", args);

    if let Err(e) = dispatch(&args.command) {
        log_failure(&e);
        out::print_error(&format!("{e}"));
    }
    Ok(())
}

fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::CreateDir { path } => {
            fs_ops::create_dir_tree(path)?;
            out::print_success(&format!("Created directory '{}'", path.display()));
        }
        Command::RemoveDir { path } => {
            fs_ops::remove_dir_tree(path)?;
            out::print_success(&format!("Removed directory '{}'", path.display()));
        }
        Command::Move { source, dest } => {
            fs_ops::relocate_path(source, dest)?;
            out::print_success(&format!(
                "Moved '{}' -> '{}'",
                source.display(),
                dest.display()
            ));
        }
        Command::BatchMove { sources, into } => {
            fs_ops::relocate_batch(sources, into)?;
            out::print_success(&format!(
                "Moved {} entr{} into '{}'",
                sources.len(),
                if sources.len() == 1 { "y" } else { "ies" },
                into.display()
            ));
        }
        Command::CreateFile { path, contents } => {
            fs_ops::create_file(path, contents.as_deref().unwrap_or(""))?;
            out::print_success(&format!("Wrote '{}'", path.display()));
        }
        Command::RemoveFile { path } => {
            fs_ops::remove_file(path)?;
            out::print_success(&format!("Removed '{}'", path.display()));
        }
        Command::Cat { path } => {
            let contents = fs_ops::read_file(path)?;
            out::print_user(contents.strip_suffix('\n').unwrap_or(&contents));
        }
        Command::List { path } => {
            for entry in fs_ops::list_dir(path)? {
                let kind = match entry.kind {
                    EntryKind::Directory => "dir",
                    EntryKind::File => "file",
                    EntryKind::Other => "other",
                };
                let size = entry.size.map_or_else(|| "-".to_string(), |s| s.to_string());
                out::print_user(&format!(
                    "{:<5} {:>10}  {}",
                    kind,
                    size,
                    entry.name.to_string_lossy()
                ));
            }
        }
        Command::Analyze {
            file,
            program,
            script,
        } => {
            let analyzer = ScriptAnalyzer::new(program).arg(script);
            match analyzer.analyze(file) {
                Ok(transcript) => {
                    out::print_user(transcript.strip_suffix('\n').unwrap_or(&transcript));
                }
                Err(e) => {
                    // Show whatever the analyzer managed to print before it
                    // failed, then surface the error itself.
                    if let AnalyzerError::Exited { transcript, .. } = &e
                        && !transcript.is_empty()
                    {
                        out::print_user(transcript.strip_suffix('\n').unwrap_or(transcript));
                    }
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}

/// Structured log entry for a failed operation: one `kind` discriminator
/// plus the paths involved.
fn log_failure(e: &anyhow::Error) {
    if let Some(re) = e.downcast_ref::<RelocateError>() {
        match re {
            RelocateError::Relocate { from, to, .. } => {
                error!(kind = "relocate", from = %from.display(), to = %to.display(), "Operation failed")
            }
            other => {
                error!(kind = "fs_op", path = %other.path().display(), "Operation failed")
            }
        }
    } else if let Some(ae) = e.downcast_ref::<AnalyzerError>() {
        match ae {
            AnalyzerError::Launch { program, .. } => {
                error!(kind = "analyzer_launch", program = %program, "Operation failed")
            }
            AnalyzerError::Exited {
                program, status, ..
            } => {
                error!(kind = "analyzer_exited", program = %program, status = %status, "Operation failed")
            }
        }
    } else {
        error!(error = ?e, "Operation failed");
    }
}
