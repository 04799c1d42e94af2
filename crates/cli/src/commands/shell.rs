//! Interactive login shell.
//!
//! A line-based menu standing in for the login and register forms:
//!
//! ```text
//! 1) Login
//! 2) Register
//! 3) Quit
//! ```
//!
//! A successful login hands off to the storefront and ends the shell.
//!
//! Input is read as plain lines, so the password is echoed as it is typed
//! and the prompt says so.

use std::io::{BufRead, Write};

use food_delivery_accounts::{AuthService, Launcher, RegistrationForm};

use super::{CliError, login, register};

/// Typed characters stay visible.
const PASSWORD_PROMPT: &str = "Password (visible): ";

/// How the shell ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// Credentials accepted and the storefront launched.
    LoggedIn,
    /// The user quit, or input ended.
    Quit,
}

/// Menu-driven front end over an [`AuthService`].
pub struct Shell<'a, R, W, L> {
    auth: &'a mut AuthService,
    launcher: &'a L,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write, L: Launcher> Shell<'a, R, W, L> {
    pub fn new(auth: &'a mut AuthService, launcher: &'a L, input: R, output: W) -> Self {
        Self {
            auth,
            launcher,
            input,
            output,
        }
    }

    /// Show the menu until the user logs in or quits.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` on terminal errors, or `CliError::Launch` if the
    /// storefront cannot be started after a successful login.
    pub fn run(&mut self) -> Result<ShellExit, CliError> {
        writeln!(self.output, "Food Delivery - User Authentication")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1) Login")?;
            writeln!(self.output, "2) Register")?;
            writeln!(self.output, "3) Quit")?;

            let Some(choice) = self.prompt("> ")? else {
                return Ok(ShellExit::Quit);
            };

            match choice.trim() {
                "1" => {
                    if self.login()? {
                        return Ok(ShellExit::LoggedIn);
                    }
                }
                "2" => self.register()?,
                "3" => {
                    if self.confirm_quit()? {
                        return Ok(ShellExit::Quit);
                    }
                }
                other => writeln!(self.output, "Unknown option '{other}'")?,
            }
        }
    }

    fn login(&mut self) -> Result<bool, CliError> {
        let Some(username) = self.prompt("Username: ")? else {
            return Ok(false);
        };
        let Some(password) = self.prompt(PASSWORD_PROMPT)? else {
            return Ok(false);
        };

        login::run(
            self.auth,
            self.launcher,
            &username,
            &password,
            &mut self.output,
        )
    }

    fn register(&mut self) -> Result<(), CliError> {
        let mut fields = Vec::with_capacity(5);
        for label in ["Username: ", PASSWORD_PROMPT, "Name: ", "Contact: ", "Address: "] {
            let Some(value) = self.prompt(label)? else {
                return Ok(());
            };
            fields.push(value);
        }

        let [username, password, name, contact, address]: [String; 5] = fields
            .try_into()
            .map_err(|_| std::io::Error::other("registration form incomplete"))?;

        register::run(
            self.auth,
            RegistrationForm {
                username,
                password,
                name,
                contact,
                address,
            },
            &mut self.output,
        )?;
        Ok(())
    }

    fn confirm_quit(&mut self) -> Result<bool, CliError> {
        let answer = self.prompt("Do you want to quit? [y/N] ")?;
        Ok(answer.is_none_or(|a| {
            matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        }))
    }

    /// Print `label` and read one line. `None` on end of input.
    ///
    /// Only the line terminator is stripped; other whitespace is kept so that
    /// registration sees exactly what was typed.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
