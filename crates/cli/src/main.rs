//! Brewbox CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! brewbox-cli migrate
//!
//! # Create a user
//! brewbox-cli user create -n "Dana" -l dana --role admin
//!
//! # Create a coffee shop owned by a user
//! brewbox-cli shop create --creator <user-id> -n "Bean There" -a "12 Main St"
//!
//! # Mint a development bearer token
//! brewbox-cli token --user <user-id>
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `user create` - Create users
//! - `shop create` - Create coffee shops
//! - `token` - Mint a development JWT

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "brewbox-cli")]
#[command(author, version, about = "Brewbox CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage coffee shops
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Mint a development bearer token
    Token {
        /// User ID to embed in the token
        #[arg(short, long)]
        user: String,

        /// Token lifetime in seconds
        #[arg(long, default_value = "86400")]
        ttl: i64,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Login, unique across users
        #[arg(short, long)]
        login: Option<String>,

        /// Phone number, unique across users
        #[arg(short, long)]
        phone: Option<String>,

        /// Global role (`admin`, `member`)
        #[arg(long, default_value = "member")]
        role: String,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// Create a new coffee shop
    Create {
        /// Creator user ID
        #[arg(long)]
        creator: String,

        /// Shop name
        #[arg(short, long)]
        name: String,

        /// Street address
        #[arg(short, long)]
        address: String,
    },
}

#[tokio::main]
async fn main() {
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
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                name,
                login,
                phone,
                role,
            } => {
                commands::seed::create_user(&name, login.as_deref(), phone.as_deref(), &role)
                    .await?;
            }
        },
        Commands::Shop { action } => match action {
            ShopAction::Create {
                creator,
                name,
                address,
            } => {
                commands::seed::create_shop(&creator, &name, &address).await?;
            }
        },
        Commands::Token { user, ttl } => commands::token::mint(&user, ttl)?,
    }
    Ok(())
}
