//! Register command.

use std::io::Write;

use food_delivery_accounts::{AuthError, AuthService, RegistrationForm};

use super::CliError;

/// Run the registration flow and report the outcome.
///
/// Validation failures and save failures are both reported to the user and
/// leave the store unchanged; the user can simply try again.
///
/// # Errors
///
/// Returns `CliError::Io` if the output cannot be written.
pub fn run(
    auth: &mut AuthService,
    form: RegistrationForm,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    match auth.register(form) {
        Ok(_) => {
            writeln!(out, "Registration Successful")?;
            Ok(true)
        }
        Err(e) => {
            if matches!(e, AuthError::Store(_)) {
                tracing::error!("Registration failed: {e}");
            }
            writeln!(out, "{}", e.user_message())?;
            Ok(false)
        }
    }
}
