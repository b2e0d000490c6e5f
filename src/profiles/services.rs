use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{SeedError, SeedResult};
use crate::profiles::options::{
    AVAILABILITY_SLOTS, DAYS_PER_PROFILE, FORMATS, FORMATS_PER_PROFILE, SESSIONS_WANTED,
    SKILLS_PER_SIDE, SLOTS_PER_PROFILE, TIMEZONES, WEEKDAYS,
};
use crate::profiles::repo_types::Profile;
use crate::sampling::{pick, pick_some};
use crate::skills::SkillCatalog;
use crate::users::User;

/// Samples 1..=3 distinct skills; fails rather than shrinking the sample.
fn sample_skills<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&str],
    user_id: u64,
) -> SeedResult<Vec<String>> {
    let k = rng.gen_range(SKILLS_PER_SIDE);
    if k > pool.len() {
        return Err(SeedError::insufficient_skills(user_id, k, pool.len()));
    }
    Ok(pool.choose_multiple(rng, k).map(|s| s.to_string()).collect())
}

fn profile_for<R: Rng + ?Sized>(
    rng: &mut R,
    user: &User,
    pool: &[&str],
) -> SeedResult<Profile> {
    let skills_to_teach = sample_skills(rng, pool, user.id)?;
    let remaining: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|s| !skills_to_teach.iter().any(|t| t == s))
        .collect();
    let skills_to_learn = sample_skills(rng, &remaining, user.id)?;

    Ok(Profile {
        id: user.id,
        name: user.name.clone(),
        skills_to_teach,
        skills_to_learn,
        sessions_wanted: pick(rng, SESSIONS_WANTED).to_string(),
        preferred_days: pick_some(rng, WEEKDAYS, DAYS_PER_PROFILE),
        timezone: pick(rng, TIMEZONES).to_string(),
        availability: pick_some(rng, AVAILABILITY_SLOTS, SLOTS_PER_PROFILE),
        preferred_format: pick_some(rng, FORMATS, FORMATS_PER_PROFILE),
    })
}

/// One profile per user, in user order, reusing each user's id and name.
pub fn generate_profiles<R: Rng + ?Sized>(
    users: &[User],
    catalog: &SkillCatalog,
    rng: &mut R,
) -> SeedResult<Vec<Profile>> {
    let pool: Vec<&str> = catalog.names().iter().map(String::as_str).collect();
    let mut profiles = Vec::with_capacity(users.len());
    for user in users {
        profiles.push(profile_for(rng, user, &pool)?);
    }

    debug!(
        profiles = profiles.len(),
        skills = pool.len(),
        "profiles generated"
    );
    Ok(profiles)
}
