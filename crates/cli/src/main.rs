//! Blood donation registry CLI - Database migrations and admin accounts.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema (donor, admin_user and session tables)
//! blood-cli migrate
//!
//! # Create an admin account (password from BLOOD_ADMIN_PASSWORD)
//! BLOOD_ADMIN_PASSWORD='...' blood-cli admin create --username admin
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Create admin users

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

mod commands;

#[derive(Parser)]
#[command(name = "blood-cli")]
#[command(author, version, about = "Blood donation registry CLI tools")]
struct Cli {
    /// `SQLite` connection string
    #[arg(
        long,
        global = true,
        env = "BLOOD_DATABASE_URL",
        default_value = "sqlite://blood_donation.db?mode=rwc",
        hide_env_values = true
    )]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password (at least 8 characters)
        #[arg(short, long, env = "BLOOD_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let database_url = SecretString::from(cli.database_url);

    match cli.command {
        Commands::Migrate => commands::migrate::run(&database_url).await?,
        Commands::Admin { action } => match action {
            AdminAction::Create { username, password } => {
                let password = SecretString::from(password);
                commands::admin::create_user(&database_url, &username, &password).await?;
            }
        },
    }
    Ok(())
}
