use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

use crate::profiles::options::{
    AVAILABILITY_SLOTS, DAYS_PER_PROFILE, FORMATS, FORMATS_PER_PROFILE, SESSIONS_WANTED,
    SKILLS_PER_SIDE, SLOTS_PER_PROFILE, TIMEZONES, WEEKDAYS,
};
use crate::profiles::Profile;
use crate::users::services::is_valid_email;
use crate::users::User;

/// A broken invariant in a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub record: &'static str,
    pub id: u64,
    pub message: String,
}

impl Violation {
    fn user(id: u64, message: impl Into<String>) -> Self {
        Self {
            record: "user",
            id,
            message: message.into(),
        }
    }

    fn profile(id: u64, message: impl Into<String>) -> Self {
        Self {
            record: "profile",
            id,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.record, self.id, self.message)
    }
}

pub fn check_users(users: &[User]) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut ids = HashSet::with_capacity(users.len());
    let first = users.first().map(|u| u.id).unwrap_or_default();

    for (i, user) in users.iter().enumerate() {
        if !ids.insert(user.id) {
            out.push(Violation::user(user.id, "duplicate id"));
        }
        match first.checked_add(i as u64) {
            Some(expected) if user.id != expected => out.push(Violation::user(
                user.id,
                format!("id breaks the contiguous sequence, expected {expected}"),
            )),
            Some(_) => {}
            None => out.push(Violation::user(user.id, "id sequence overflows u64")),
        }
        if !is_valid_email(&user.email) {
            out.push(Violation::user(
                user.id,
                format!("malformed email '{}'", user.email),
            ));
        }
        if user.updated_at < user.created_at {
            out.push(Violation::user(user.id, "updated_at precedes created_at"));
        }
    }
    out
}

fn check_subset(
    out: &mut Vec<Violation>,
    id: u64,
    field: &str,
    values: &[String],
    options: Option<&[&str]>,
    size: RangeInclusive<usize>,
) {
    if !size.contains(&values.len()) {
        out.push(Violation::profile(
            id,
            format!(
                "{field} has {} entries, expected {}..={}",
                values.len(),
                size.start(),
                size.end()
            ),
        ));
    }
    let unique: HashSet<&String> = values.iter().collect();
    if unique.len() != values.len() {
        out.push(Violation::profile(id, format!("{field} contains duplicates")));
    }
    if let Some(options) = options {
        for value in values.iter().filter(|v| !options.contains(&v.as_str())) {
            out.push(Violation::profile(
                id,
                format!("{field} has unknown value '{value}'"),
            ));
        }
    }
}

pub fn check_profiles(users: &[User], profiles: &[Profile]) -> Vec<Violation> {
    let mut out = Vec::new();

    if users.len() != profiles.len() {
        out.push(Violation::profile(
            profiles.last().map(|p| p.id).unwrap_or_default(),
            format!("{} profiles for {} users", profiles.len(), users.len()),
        ));
    }

    for (user, profile) in users.iter().zip(profiles) {
        let id = profile.id;
        if profile.id != user.id {
            out.push(Violation::profile(id, format!("does not match user {}", user.id)));
        }
        if profile.name != user.name {
            out.push(Violation::profile(id, "name differs from its user"));
        }
    }

    for p in profiles {
        let id = p.id;
        check_subset(&mut out, id, "skillsToTeach", &p.skills_to_teach, None, SKILLS_PER_SIDE);
        check_subset(&mut out, id, "skillsToLearn", &p.skills_to_learn, None, SKILLS_PER_SIDE);
        if p.skills_to_teach.iter().any(|s| p.skills_to_learn.contains(s)) {
            out.push(Violation::profile(id, "skillsToTeach overlaps skillsToLearn"));
        }
        check_subset(
            &mut out,
            id,
            "preferredDays",
            &p.preferred_days,
            Some(WEEKDAYS),
            DAYS_PER_PROFILE,
        );
        check_subset(
            &mut out,
            id,
            "availability",
            &p.availability,
            Some(AVAILABILITY_SLOTS),
            SLOTS_PER_PROFILE,
        );
        check_subset(
            &mut out,
            id,
            "preferredFormat",
            &p.preferred_format,
            Some(FORMATS),
            FORMATS_PER_PROFILE,
        );
        if !SESSIONS_WANTED.contains(&p.sessions_wanted.as_str()) {
            out.push(Violation::profile(
                id,
                format!("unknown sessionsWanted '{}'", p.sessions_wanted),
            ));
        }
        if !TIMEZONES.contains(&p.timezone.as_str()) {
            out.push(Violation::profile(id, format!("unknown timezone '{}'", p.timezone)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn user(id: u64) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@gmail.com"),
            password_hash: "abc123abc1".into(),
            created_at: datetime!(2024-01-01 10:00:00),
            updated_at: datetime!(2024-01-02 10:00:00),
        }
    }

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn profile(id: u64) -> Profile {
        Profile {
            id,
            name: format!("User {id}"),
            skills_to_teach: strings(&["Rust"]),
            skills_to_learn: strings(&["Go", "SQL"]),
            sessions_wanted: "2–3".into(),
            preferred_days: strings(&["monday", "friday"]),
            timezone: "UTC+5.5".into(),
            availability: strings(&["Evening"]),
            preferred_format: strings(&["video", "chat"]),
        }
    }

    #[test]
    fn clean_dataset_has_no_violations() {
        let users = vec![user(1001), user(1002)];
        let profiles = vec![profile(1001), profile(1002)];
        assert!(check_users(&users).is_empty());
        assert!(check_profiles(&users, &profiles).is_empty());
    }

    #[test]
    fn gap_and_time_travel_are_reported() {
        let mut late = user(1003);
        late.updated_at = datetime!(2023-12-31 00:00:00);
        let violations = check_users(&[user(1001), late]);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.id == 1003));
    }

    #[test]
    fn id_sequence_past_u64_max_is_reported() {
        let violations = check_users(&[user(u64::MAX), user(5)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].id, 5);
        assert_eq!(violations[0].message, "id sequence overflows u64");
    }

    #[test]
    fn malformed_email_is_reported() {
        let mut bad = user(1001);
        bad.email = "no spaces allowed@gmail.com".into();
        let violations = check_users(&[bad]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.starts_with("malformed email"));
    }

    #[test]
    fn overlapping_skills_and_bad_days_are_reported() {
        let users = vec![user(1001)];
        let mut p = profile(1001);
        p.skills_to_learn.push("Rust".into());
        p.preferred_days = vec!["funday".into()];
        let messages: Vec<String> = check_profiles(&users, &[p])
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(messages.iter().any(|m| m.contains("overlaps")));
        assert!(messages.iter().any(|m| m.contains("unknown value 'funday'")));
    }

    #[test]
    fn mismatched_ids_and_counts_are_reported() {
        let users = vec![user(1001), user(1002)];
        let violations = check_profiles(&users, &[profile(1002)]);
        assert!(violations.iter().any(|v| v.message.contains("1 profiles for 2 users")));
        assert!(violations.iter().any(|v| v.message.contains("does not match user 1001")));
    }
}
