use std::ops::RangeInclusive;

pub const SESSIONS_WANTED: &[&str] = &["1", "2–3", "4–6", "7–10"];

pub const WEEKDAYS: &[&str] = &[
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

pub const TIMEZONES: &[&str] = &[
    "UTC-10.5", "UTC-7.0", "UTC+0.0", "UTC+5.5", "UTC+6.5", "UTC+9.0",
];

pub const AVAILABILITY_SLOTS: &[&str] = &["Morning", "Afternoon", "Evening", "Night"];

pub const FORMATS: &[&str] = &["video", "in-person", "chat", "phone", "flexible"];

pub const SKILLS_PER_SIDE: RangeInclusive<usize> = 1..=3;
pub const DAYS_PER_PROFILE: RangeInclusive<usize> = 1..=4;
pub const SLOTS_PER_PROFILE: RangeInclusive<usize> = 1..=3;
pub const FORMATS_PER_PROFILE: RangeInclusive<usize> = 1..=3;
