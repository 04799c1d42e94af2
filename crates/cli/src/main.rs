//! Food Delivery CLI - login shell for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu (default)
//! fd-cli
//!
//! # Log in and open the storefront
//! fd-cli login -u alice -p wonderland
//!
//! # Create an account
//! fd-cli register -u alice -p wonderland -n "Alice" -c 555-0100 -a "1 Rabbit Hole"
//! ```
//!
//! # Commands
//!
//! - `login` - Check credentials and launch the storefront
//! - `register` - Save a new account to the records file
//! - `interactive` - Menu-driven login and registration
//!
//! Exits with status 1 when credentials or registration are rejected.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use food_delivery_accounts::{
    AccountsConfig, AuthService, Launcher, RegistrationForm, StorefrontLauncher,
};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::CliError;
use commands::shell::{Shell, ShellExit};

#[derive(Parser)]
#[command(name = "fd-cli")]
#[command(author, version, about = "Food delivery login shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and open the storefront
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// Letters and digits only
        #[arg(short, long)]
        username: String,

        /// At least 6 characters
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Phone number or other contact
        #[arg(short, long, default_value = "")]
        contact: String,

        /// Delivery address
        #[arg(short, long, default_value = "")]
        address: String,
    },
    /// Menu-driven login and registration
    Interactive,
}

/// Default log filter. `fd_cli` is the target of this binary's own events.
const DEFAULT_LOG_FILTER: &str = "fd_cli=info,food_delivery_accounts=info";

fn main() {
    // Logs go to stderr so they never mix with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Interactive);

    let result = AccountsConfig::from_env()
        .map_err(CliError::from)
        .and_then(|config| {
            let launcher = StorefrontLauncher::new(config.storefront_bin.clone());
            run(command, &config, &launcher, io::stdin().lock(), io::stdout().lock())
        });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    }
}

fn report_failure(err: &CliError) {
    tracing::error!("Command failed: {err}");
}

fn run(
    command: Commands,
    config: &AccountsConfig,
    launcher: &impl Launcher,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<bool, CliError> {
    let mut auth = AuthService::from_config(config)?;

    match command {
        Commands::Login { username, password } => {
            commands::login::run(&auth, launcher, &username, &password, &mut out)
        }
        Commands::Register {
            username,
            password,
            name,
            contact,
            address,
        } => commands::register::run(
            &mut auth,
            RegistrationForm {
                username,
                password,
                name,
                contact,
                address,
            },
            &mut out,
        ),
        Commands::Interactive => {
            if Shell::new(&mut auth, launcher, input, &mut out).run()? == ShellExit::Quit {
                tracing::debug!("Shell closed without login");
            }
            Ok(true)
        }
    }
}
