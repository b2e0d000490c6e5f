use tracing::{info, instrument, warn};

use crate::check::{check_profiles, check_users, Violation};
use crate::config::SeedConfig;
use crate::error::SeedResult;
use crate::profiles::{generate_profiles, Profile};
use crate::sampling::rng_for;
use crate::skills::{default_catalog, load_catalog};
use crate::storage::{read_json, write_json_atomic};
use crate::users::{generate_users, User};

#[instrument(skip_all, fields(path = %cfg.users_path.display()))]
pub fn run_users(cfg: &SeedConfig) -> SeedResult<Vec<User>> {
    cfg.validate()?;
    let users = generate_users(&cfg.users, &mut rng_for(cfg.seed))?;
    write_json_atomic(&cfg.users_path, &users)?;
    info!(count = users.len(), "user records written");
    Ok(users)
}

#[instrument(skip_all, fields(path = %cfg.profiles_path.display()))]
pub fn run_profiles(cfg: &SeedConfig) -> SeedResult<Vec<Profile>> {
    let users: Vec<User> = read_json(&cfg.users_path)?;
    let catalog = load_catalog(&cfg.skills_path)?;
    let profiles = generate_profiles(&users, &catalog, &mut rng_for(cfg.seed))?;
    write_json_atomic(&cfg.profiles_path, &profiles)?;
    info!(count = profiles.len(), "profiles linked to users written");
    Ok(profiles)
}

#[instrument(skip_all, fields(path = %cfg.skills_path.display()))]
pub fn run_skills(cfg: &SeedConfig) -> SeedResult<usize> {
    let entries = default_catalog();
    write_json_atomic(&cfg.skills_path, &entries)?;
    info!(count = entries.len(), "skill catalog written");
    Ok(entries.len())
}

/// Users then profiles, each step seeded exactly as when run on its own.
pub fn run_all(cfg: &SeedConfig) -> SeedResult<(Vec<User>, Vec<Profile>)> {
    let users = run_users(cfg)?;
    let profiles = run_profiles(cfg)?;
    Ok((users, profiles))
}

#[instrument(skip_all)]
pub fn run_check(cfg: &SeedConfig) -> SeedResult<Vec<Violation>> {
    let users: Vec<User> = read_json(&cfg.users_path)?;
    let profiles: Vec<Profile> = read_json(&cfg.profiles_path)?;

    let mut violations = check_users(&users);
    violations.extend(check_profiles(&users, &profiles));

    for v in &violations {
        warn!(record = v.record, id = v.id, "{}", v.message);
    }
    info!(
        users = users.len(),
        profiles = profiles.len(),
        violations = violations.len(),
        "dataset checked"
    );
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;
    use crate::skills::repo_types::SkillEntry;
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path, count: usize, seed: u64) -> SeedConfig {
        let mut cfg = SeedConfig {
            users_path: dir.join("users.json"),
            skills_path: dir.join("skills.json"),
            profiles_path: dir.join("profiles.json"),
            seed: Some(seed),
            ..SeedConfig::default()
        };
        cfg.users.count = count;
        cfg.users.now = Some(1_700_000_000);
        cfg
    }

    fn write_catalog(cfg: &SeedConfig, names: &[&str]) {
        let entries: Vec<SkillEntry> = names
            .iter()
            .zip(1u64..)
            .map(|(name, id)| SkillEntry {
                id: Some(id.into()),
                name: name.to_string(),
            })
            .collect();
        write_json_atomic(&cfg.skills_path, &entries).unwrap();
    }

    #[test]
    fn three_users_five_skills_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), 3, 21);
        write_catalog(&cfg, &["Rust", "Go", "Yoga", "Piano", "SQL"]);

        run_users(&cfg).unwrap();
        run_profiles(&cfg).unwrap();

        let users: Vec<User> = read_json(&cfg.users_path).unwrap();
        let profiles: Vec<Profile> = read_json(&cfg.profiles_path).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(profiles.len(), 3);
        let user_ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        let profile_ids: Vec<u64> = profiles.iter().map(|p| p.id).collect();
        assert_eq!(user_ids, vec![1001, 1002, 1003]);
        assert_eq!(profile_ids, user_ids);
        assert!(run_check(&cfg).unwrap().is_empty());
    }

    #[test]
    fn same_seed_gives_identical_files() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        for dir in [a.path(), b.path()] {
            let cfg = config_in(dir, 40, 77);
            run_skills(&cfg).unwrap();
            run_all(&cfg).unwrap();
        }
        for file in ["users.json", "profiles.json"] {
            assert_eq!(
                fs::read(a.path().join(file)).unwrap(),
                fs::read(b.path().join(file)).unwrap(),
                "{file} differs"
            );
        }
    }

    #[test]
    fn all_matches_separate_steps() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();

        let cfg_a = config_in(a.path(), 10, 5);
        run_skills(&cfg_a).unwrap();
        run_all(&cfg_a).unwrap();

        let cfg_b = config_in(b.path(), 10, 5);
        run_skills(&cfg_b).unwrap();
        run_users(&cfg_b).unwrap();
        run_profiles(&cfg_b).unwrap();

        assert_eq!(
            fs::read(&cfg_a.profiles_path).unwrap(),
            fs::read(&cfg_b.profiles_path).unwrap()
        );
    }

    #[test]
    fn output_is_indented_and_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), 200, 3);
        run_skills(&cfg).unwrap();
        let (_, profiles) = run_all(&cfg).unwrap();

        let text = fs::read_to_string(&cfg.profiles_path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"id\": 1001,"));
        assert!(!text.contains("\\u2013"));
        if profiles.iter().any(|p| p.sessions_wanted.contains('–')) {
            assert!(text.contains('–'));
        }
    }

    #[test]
    fn profiles_without_users_file_fail() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), 3, 1);
        run_skills(&cfg).unwrap();
        let err = run_profiles(&cfg).unwrap_err();
        assert!(matches!(err, SeedError::ReadFile { .. }));
        assert!(!cfg.profiles_path.exists());
    }

    #[test]
    fn profiles_without_skills_file_fail() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), 3, 1);
        run_users(&cfg).unwrap();
        let err = run_profiles(&cfg).unwrap_err();
        assert!(matches!(err, SeedError::ReadFile { .. }));
    }

    #[test]
    fn insufficient_catalog_leaves_previous_profiles_intact() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), 5, 9);
        run_skills(&cfg).unwrap();
        run_all(&cfg).unwrap();
        let before = fs::read(&cfg.profiles_path).unwrap();

        write_catalog(&cfg, &["Rust"]);
        let err = run_profiles(&cfg).unwrap_err();
        assert!(matches!(err, SeedError::InsufficientSkills { .. }));
        assert_eq!(fs::read(&cfg.profiles_path).unwrap(), before);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config_in(dir.path(), 3, 1);
        cfg.users.email_domain = String::new();
        assert!(matches!(
            run_users(&cfg).unwrap_err(),
            SeedError::InvalidConfig { .. }
        ));
        assert!(!cfg.users_path.exists());
    }

    #[test]
    fn check_reports_tampered_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), 4, 13);
        run_skills(&cfg).unwrap();
        let (_, mut profiles) = run_all(&cfg).unwrap();

        profiles[1].skills_to_learn = profiles[1].skills_to_teach.clone();
        write_json_atomic(&cfg.profiles_path, &profiles).unwrap();

        let violations = run_check(&cfg).unwrap();
        assert!(violations
            .iter()
            .any(|v| v.id == profiles[1].id && v.message.contains("overlaps")));
    }
}
