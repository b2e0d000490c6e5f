use std::collections::HashSet;

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

use crate::config::UserGenConfig;
use crate::error::{SeedError, SeedResult};
use crate::users::names::full_name;
use crate::users::repo_types::User;

const HASH_ALPHABET: &[u8] = b"abcdef0123456789";
const LOOKBACK_SECS: i64 = 365 * 24 * 60 * 60;
const MAX_UPDATE_DAYS: i64 = 60;
const MAX_UPDATE_HOURS: i64 = 12;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref LOCAL_PART_STRIP_RE: Regex = Regex::new(r"[\s.]+").unwrap();
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Lowercased name with whitespace and periods removed.
pub fn email_local_part(name: &str) -> String {
    LOCAL_PART_STRIP_RE
        .replace_all(&name.to_lowercase(), "")
        .into_owned()
}

fn fake_password_hash<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .filter_map(|_| HASH_ALPHABET.choose(rng).map(|&b| char::from(b)))
        .collect()
}

fn to_primitive(dt: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(dt.date(), dt.time())
}

/// `created_at` within the year before `anchor`; `updated_at` up to 60 days
/// and 12 hours after it.
fn timestamps<R: Rng + ?Sized>(
    rng: &mut R,
    anchor: OffsetDateTime,
) -> SeedResult<(PrimitiveDateTime, PrimitiveDateTime)> {
    let out_of_range =
        || SeedError::invalid_config("now", "anchor is too close to the time range limits");

    let back = Duration::seconds(rng.gen_range(0..=LOOKBACK_SECS));
    let created = anchor.checked_sub(back).ok_or_else(out_of_range)?;

    let forward = Duration::days(rng.gen_range(0..=MAX_UPDATE_DAYS))
        + Duration::hours(rng.gen_range(0..=MAX_UPDATE_HOURS));
    let updated = created.checked_add(forward).ok_or_else(out_of_range)?;

    Ok((to_primitive(created), to_primitive(updated)))
}

/// Generates `cfg.count` users with ids `id_base + 1 ..= id_base + count`.
pub fn generate_users<R: Rng + ?Sized>(
    cfg: &UserGenConfig,
    rng: &mut R,
) -> SeedResult<Vec<User>> {
    let anchor = cfg.anchor()?;
    let mut users = Vec::with_capacity(cfg.count);
    let mut seen_emails = HashSet::with_capacity(cfg.count);
    let mut collisions = 0usize;

    for i in 1..=cfg.count as u64 {
        let id = cfg.id_base + i;
        let name = full_name(rng);
        let local = format!("{}{}", email_local_part(&name), rng.gen_range(1..=99u8));

        let mut email = format!("{local}@{}", cfg.email_domain);
        if !seen_emails.insert(email.clone()) {
            collisions += 1;
            if cfg.unique_emails {
                let mut n = 2u32;
                loop {
                    email = format!("{local}_{n}@{}", cfg.email_domain);
                    if seen_emails.insert(email.clone()) {
                        break;
                    }
                    n += 1;
                }
            }
        }

        let password_hash = fake_password_hash(rng, cfg.hash_length);
        let (created_at, updated_at) = timestamps(rng, anchor)?;

        users.push(User {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        });
    }

    debug!(
        count = users.len(),
        first_id = cfg.id_base + 1,
        email_collisions = collisions,
        unique_emails = cfg.unique_emails,
        "users generated"
    );
    Ok(users)
}
