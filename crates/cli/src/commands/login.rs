//! Login command.

use std::io::Write;

use food_delivery_accounts::{AuthService, Launcher};

use super::CliError;

/// Check credentials and, if accepted, hand off to the storefront.
///
/// # Errors
///
/// Returns `CliError::Launch` if the storefront cannot be started, or
/// `CliError::Io` if the output cannot be written.
pub fn run(
    auth: &AuthService,
    launcher: &impl Launcher,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    if let Err(e) = auth.login(username, password) {
        writeln!(out, "{}", e.user_message())?;
        return Ok(false);
    }

    launcher.launch()?;
    writeln!(out, "Login successful, storefront started")?;
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use food_delivery_accounts::{LaunchError, RegistrationForm};
    use tempfile::TempDir;

    use super::*;
    use crate::commands::test_support::{FakeLauncher, auth};

    #[test]
    fn test_accepted_login_launches_storefront() {
        let dir = TempDir::new().unwrap();
        let mut auth = auth(&dir);
        auth.register(RegistrationForm {
            username: "alice".to_string(),
            password: "wonderland".to_string(),
            ..RegistrationForm::default()
        })
        .unwrap();

        let launcher = FakeLauncher::default();
        let mut out = Vec::new();
        assert!(run(&auth, &launcher, "alice", "wonderland", &mut out).unwrap());
        assert_eq!(launcher.launches.get(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Login successful, storefront started\n"
        );
    }

    #[test]
    fn test_rejected_login_does_not_launch() {
        let dir = TempDir::new().unwrap();
        let auth = auth(&dir);

        let launcher = FakeLauncher::default();
        let mut out = Vec::new();
        assert!(!run(&auth, &launcher, "alice", "nope", &mut out).unwrap());
        assert_eq!(launcher.launches.get(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Invalid username or password\n"
        );
    }

    #[test]
    fn test_launch_failure_is_an_error() {
        struct Broken;
        impl Launcher for Broken {
            fn launch(&self) -> Result<u32, LaunchError> {
                Err(LaunchError::Spawn {
                    program: "missing".to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            }
        }

        let dir = TempDir::new().unwrap();
        let auth = auth(&dir);
        let mut out = Vec::new();
        let err = run(&auth, &Broken, "manager", "pass", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Launch(_)));
        assert!(out.is_empty());
    }
}
