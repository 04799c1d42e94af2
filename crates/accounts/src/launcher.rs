//! Hand-off from the login shell to the storefront process.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors that can occur launching the storefront.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start storefront '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can hand control to the storefront.
pub trait Launcher {
    /// Start the storefront and return its process ID.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError` if the storefront cannot be started.
    fn launch(&self) -> Result<u32, LaunchError>;
}

/// Starts the storefront as an independent process.
///
/// The child gets no arguments and inherits the environment. It is not
/// waited on; the login shell is expected to exit right after.
#[derive(Debug, Clone)]
pub struct StorefrontLauncher {
    program: PathBuf,
}

impl StorefrontLauncher {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program that gets spawned.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Launcher for StorefrontLauncher {
    #[allow(clippy::zombie_processes)] // detached
    fn launch(&self) -> Result<u32, LaunchError> {
        let child = Command::new(&self.program)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let pid = child.id();
        tracing::info!(program = %self.program.display(), pid, "Storefront launched");
        Ok(pid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let launcher = StorefrontLauncher::new("definitely-not-a-real-storefront-binary");
        let err = launcher.launch().unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { ref program, .. } if program == "definitely-not-a-real-storefront-binary"));
        assert!(err.to_string().contains("definitely-not-a-real-storefront-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_existing_program() {
        let launcher = StorefrontLauncher::new("true");
        let pid = launcher.launch().unwrap();
        assert!(pid > 0);
    }
}
