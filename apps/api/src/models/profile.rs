use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The resume facts bundled with the service.
const EMBEDDED_PROFILE: &str = include_str!("../../data/profile.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Portfolio domain, e.g. `example.dev`.
    pub portfolio: String,
    /// LinkedIn handle (the part after `linkedin.com/in/`).
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillSet {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Cgpa,
    Percentage,
}

impl ScoreKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreKind::Cgpa => "CGPA",
            ScoreKind::Percentage => "score",
        }
    }
}

/// One education record. `score` is kept as the display string
/// ("8.2/10", "82%"), never normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub score: String,
    pub score_kind: ScoreKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub duration: String,
    pub repository: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

/// Everything the chat widget knows about the site owner.
///
/// Loaded once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactBase {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub strengths: Vec<String>,
}

impl FactBase {
    /// Parses the profile compiled into the binary.
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_PROFILE).context("Embedded profile.json is malformed")
    }

    /// Loads a fact base from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fact base at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Fact base at {} is not valid JSON", path.display()))
    }

    /// First whitespace-separated token of the owner's name.
    pub fn first_name(&self) -> &str {
        self.personal_info
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&self.personal_info.name)
    }
}
