use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::SeedResult;
use crate::skills::repo_types::SkillEntry;
use crate::storage::read_json;

const PREDEFINED_SKILLS: &[&str] = &[
    "JavaScript", "Python", "React", "Node.js", "Web Design", "UI/UX Design",
    "Graphic Design", "Photography", "Video Editing", "Content Writing",
    "Digital Marketing", "SEO", "Social Media Marketing", "Data Analysis",
    "Machine Learning", "Mobile Development", "Guitar", "Piano", "Singing",
    "Dancing", "Yoga", "Fitness Training", "Cooking", "Baking", "Drawing",
    "Painting", "Public Speaking", "Language Teaching", "Math Tutoring",
    "HTML/CSS", "TypeScript", "Vue.js", "Angular", "Express.js", "MongoDB",
    "SQL", "Java", "C++", "C#", "Swift", "Kotlin", "Flutter", "Dart",
    "PHP", "Ruby", "Go", "Rust", "Docker", "Kubernetes", "AWS", "Azure",
    "Git", "Linux", "DevOps", "Cybersecurity", "Blockchain", "Web3",
    "Game Development", "3D Modeling", "Animation", "Illustration",
    "Music Production", "Sound Design", "Podcasting", "Creative Writing",
    "Business Strategy", "Project Management", "Agile", "Scrum",
    "Financial Planning", "Investing", "Trading", "Accounting",
    "Spanish", "French", "German", "Mandarin", "Japanese", "Korean",
    "Meditation", "Mindfulness", "Life Coaching", "Career Counseling",
];

/// Distinct skill names in catalog order; the sampling universe for profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    names: Vec<String>,
}

impl SkillCatalog {
    /// Keeps the first occurrence of every name.
    pub fn from_entries(entries: Vec<SkillEntry>) -> Self {
        let total = entries.len();
        let mut seen = HashSet::with_capacity(total);
        let names: Vec<String> = entries
            .into_iter()
            .map(|e| e.name)
            .filter(|name| seen.insert(name.clone()))
            .collect();

        if names.len() < total {
            warn!(
                duplicates = total - names.len(),
                "skill catalog contains duplicate names; keeping first occurrences"
            );
        }
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn load_catalog(path: &Path) -> SeedResult<SkillCatalog> {
    let entries: Vec<SkillEntry> = read_json(path)?;
    let catalog = SkillCatalog::from_entries(entries);
    if catalog.is_empty() {
        warn!(path = %path.display(), "skill catalog is empty");
    }
    debug!(path = %path.display(), skills = catalog.len(), "skill catalog loaded");
    Ok(catalog)
}

/// Built-in catalog with ids starting at 1.
pub fn default_catalog() -> Vec<SkillEntry> {
    PREDEFINED_SKILLS
        .iter()
        .zip(1u64..)
        .map(|(name, id)| SkillEntry {
            id: Some(id.into()),
            name: name.to_string(),
        })
        .collect()
}
