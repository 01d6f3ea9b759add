//! Delegation to the real fizzy executable.
//!
//! fizzy inherits stdin, stdout and stderr directly. Its exit status becomes
//! ours unchanged; only a failure to start it at all produces a diagnostic
//! of our own.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::config::INSTALL_HINT;
use crate::error::{Error, Result};

/// Exit code used when fizzy-md itself fails.
pub const FAILURE_CODE: i32 = 1;

/// A located delegate executable.
#[derive(Debug, Clone)]
pub struct Delegate {
    path: PathBuf,
}

impl Delegate {
    /// Searches `PATH` for `name`.
    pub fn locate(name: &str) -> Result<Self> {
        let cwd = env::current_dir().unwrap_or_default();
        Self::locate_in(name, env::var_os("PATH").as_deref(), &cwd)
    }

    /// Searches an explicit path list for `name`, resolving relative
    /// entries against `cwd`.
    pub fn locate_in(name: &str, paths: Option<&OsStr>, cwd: &Path) -> Result<Self> {
        let path = which::which_in(name, paths, cwd).map_err(|source| Error::DelegateNotFound {
            name: name.to_string(),
            install_hint: INSTALL_HINT,
            source,
        })?;
        debug!("located {name} at {}", path.display());
        Ok(Self { path })
    }

    /// Absolute path of the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the delegate with `args`, blocking until it terminates.
    ///
    /// `Ok` means the process ran, whatever its exit status.
    pub fn run(&self, args: &[OsString]) -> Result<ExitStatus> {
        debug!("running {} with {} args", self.path.display(), args.len());

        Command::new(&self.path)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::DelegateExecution {
                path: self.path.clone(),
                source,
            })
    }
}

/// Maps the delegate's termination status onto our own exit code.
///
/// Explicit exit codes pass through unchanged. On Unix, death by signal
/// `N` maps to `128 + N` like a shell would report it.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    FAILURE_CODE
}

#[cfg(test)]
#[path = "delegate_tests.rs"]
mod tests;
