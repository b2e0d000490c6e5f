use std::path::PathBuf;
use std::str::FromStr;

use time::OffsetDateTime;

use crate::error::{SeedError, SeedResult};

pub const DEFAULT_USER_COUNT: usize = 500;
pub const DEFAULT_ID_BASE: u64 = 1000;
pub const DEFAULT_EMAIL_DOMAIN: &str = "gmail.com";
pub const DEFAULT_HASH_LENGTH: usize = 10;

#[derive(Debug, Clone)]
pub struct UserGenConfig {
    pub count: usize,
    /// First generated id is `id_base + 1`.
    pub id_base: u64,
    pub email_domain: String,
    pub hash_length: usize,
    pub unique_emails: bool,
    /// Unix seconds used as "now"; the wall clock when unset.
    pub now: Option<i64>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_USER_COUNT,
            id_base: DEFAULT_ID_BASE,
            email_domain: DEFAULT_EMAIL_DOMAIN.into(),
            hash_length: DEFAULT_HASH_LENGTH,
            unique_emails: false,
            now: None,
        }
    }
}

impl UserGenConfig {
    /// Anchor instant, truncated to whole seconds.
    pub fn anchor(&self) -> SeedResult<OffsetDateTime> {
        let secs = self
            .now
            .unwrap_or_else(|| OffsetDateTime::now_utc().unix_timestamp());
        Ok(OffsetDateTime::from_unix_timestamp(secs)?)
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub users_path: PathBuf,
    pub skills_path: PathBuf,
    pub profiles_path: PathBuf,
    pub seed: Option<u64>,
    pub users: UserGenConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users_path: "users.json".into(),
            skills_path: "skills.json".into(),
            profiles_path: "profiles.json".into(),
            seed: None,
            users: UserGenConfig::default(),
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let users = UserGenConfig {
            count: parse_or(lookup("SEED_USER_COUNT"), defaults.users.count),
            id_base: parse_or(lookup("SEED_ID_BASE"), defaults.users.id_base),
            email_domain: lookup("SEED_EMAIL_DOMAIN").unwrap_or(defaults.users.email_domain),
            hash_length: parse_or(lookup("SEED_HASH_LENGTH"), defaults.users.hash_length),
            unique_emails: parse_or(lookup("SEED_UNIQUE_EMAILS"), false),
            now: parse_opt(lookup("SEED_NOW")),
        };

        Self {
            users_path: lookup("SEED_USERS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.users_path),
            skills_path: lookup("SEED_SKILLS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.skills_path),
            profiles_path: lookup("SEED_PROFILES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.profiles_path),
            seed: parse_opt(lookup("SEED_RNG_SEED")),
            users,
        }
    }

    pub fn validate(&self) -> SeedResult<()> {
        let domain = &self.users.email_domain;
        if domain.is_empty() || domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(SeedError::invalid_config(
                "email_domain",
                format!("'{domain}' is not a mail domain"),
            ));
        }
        if self.users.hash_length == 0 {
            return Err(SeedError::invalid_config(
                "hash_length",
                "must be at least 1",
            ));
        }
        if self.users.id_base.checked_add(self.users.count as u64).is_none() {
            return Err(SeedError::invalid_config(
                "id_base",
                format!(
                    "{} + {} users overflows the id range",
                    self.users.id_base, self.users.count
                ),
            ));
        }
        Ok(())
    }
}

fn parse_opt<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse::<T>().ok())
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    parse_opt(value).unwrap_or(default)
}
