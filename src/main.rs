use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod check;
mod config;
mod error;
mod pipeline;
mod profiles;
mod sampling;
mod skills;
mod storage;
mod users;

use crate::config::{SeedConfig, UserGenConfig};

#[derive(Parser, Debug)]
#[command(name = "skillswap-seed")]
#[command(about = "Generate sample users and linked skill-swap profiles as JSON fixtures")]
struct Cli {
    /// Users file (written by `users`, read by `profiles`)
    #[arg(long = "users-file", global = true)]
    users_file: Option<PathBuf>,

    /// Skill catalog file
    #[arg(long = "skills-file", global = true)]
    skills_file: Option<PathBuf>,

    /// Profiles file
    #[arg(long = "profiles-file", global = true)]
    profiles_file: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the users file
    Users(UserArgs),
    /// Generate one profile per user from the users and skills files
    Profiles,
    /// Write the built-in skill catalog
    Skills,
    /// Generate users, then profiles
    All(UserArgs),
    /// Verify the invariants of existing users and profiles files
    Check,
}

#[derive(Args, Debug)]
struct UserArgs {
    /// Number of users
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Ids start right after this value
    #[arg(long)]
    id_base: Option<u64>,

    #[arg(long)]
    email_domain: Option<String>,

    /// Disambiguate colliding emails
    #[arg(long)]
    unique_emails: bool,

    /// Unix seconds to treat as "now"
    #[arg(long, allow_negative_numbers = true)]
    now: Option<i64>,
}

impl UserArgs {
    fn apply(self, cfg: &mut UserGenConfig) {
        if let Some(count) = self.count {
            cfg.count = count;
        }
        if let Some(id_base) = self.id_base {
            cfg.id_base = id_base;
        }
        if let Some(domain) = self.email_domain {
            cfg.email_domain = domain;
        }
        if self.unique_emails {
            cfg.unique_emails = true;
        }
        if self.now.is_some() {
            cfg.now = self.now;
        }
    }
}

impl Cli {
    fn into_config(self, mut cfg: SeedConfig) -> (SeedConfig, Command) {
        if let Some(path) = self.users_file {
            cfg.users_path = path;
        }
        if let Some(path) = self.skills_file {
            cfg.skills_path = path;
        }
        if let Some(path) = self.profiles_file {
            cfg.profiles_path = path;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        (cfg, self.command)
    }
}

fn init_logging() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "skillswap_seed=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let (mut cfg, command) = cli.into_config(SeedConfig::from_env());

    match command {
        Command::Users(args) => {
            args.apply(&mut cfg.users);
            pipeline::run_users(&cfg)?;
        }
        Command::Profiles => {
            pipeline::run_profiles(&cfg)?;
        }
        Command::Skills => {
            pipeline::run_skills(&cfg)?;
        }
        Command::All(args) => {
            args.apply(&mut cfg.users);
            pipeline::run_all(&cfg)?;
        }
        Command::Check => {
            let violations = pipeline::run_check(&cfg)?;
            if !violations.is_empty() {
                anyhow::bail!("{} invariant violations found", violations.len());
            }
        }
    }

    Ok(())
}
