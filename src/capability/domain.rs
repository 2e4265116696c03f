use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Partner,
    Director,
    Senior,
    Intermediate,
    Junior,
    Admin,
}

impl Seniority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Partner => "Partner",
            Self::Director => "Director",
            Self::Senior => "Senior",
            Self::Intermediate => "Intermediate",
            Self::Junior => "Junior",
            Self::Admin => "Admin",
        }
    }
}

/// One skill a service line needs before it can be sold and delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill_name: String,
    pub minimum_level: u8,
    pub ideal_level: u8,
    pub critical_to_delivery: bool,
    pub recommended_seniority: Vec<Seniority>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRole {
    pub seniority: Seniority,
    pub hours_estimate: String,
    pub responsibilities: Vec<&'static str>,
}

/// A sellable advisory offering from the practice catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub delivery_time: String,
    pub coming_soon: bool,
    pub required_skills: Vec<SkillRequirement>,
    pub delivery_team: Vec<DeliveryRole>,
}

impl ServiceLine {
    pub fn critical_requirements(&self) -> impl Iterator<Item = &SkillRequirement> {
        self.required_skills
            .iter()
            .filter(|requirement| requirement.critical_to_delivery)
    }
}

/// One assessed skill for one member. Levels and interest live on a 0-5
/// scale; out-of-range input from the assessment export is clamped here so
/// percentage math downstream stays inside [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill_name: String,
    pub level: u8,
    #[serde(default)]
    pub interest: u8,
}

impl SkillEntry {
    pub fn new(skill_name: impl Into<String>, level: u8, interest: u8) -> Self {
        Self {
            skill_name: skill_name.into(),
            level: level.min(MAX_SKILL_LEVEL),
            interest: interest.min(MAX_SKILL_LEVEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub skills: Vec<SkillEntry>,
}

impl TeamMember {
    /// Effective level for a skill; absent or unknown skills count as zero,
    /// never as "unknown/pass".
    pub fn level_for(&self, skill_name: &str) -> u8 {
        self.skills
            .iter()
            .find(|entry| entry.skill_name == skill_name)
            .map(|entry| entry.level.min(MAX_SKILL_LEVEL))
            .unwrap_or(0)
    }

    pub fn interest_for(&self, skill_name: &str) -> u8 {
        self.skills
            .iter()
            .find(|entry| entry.skill_name == skill_name)
            .map(|entry| entry.interest.min(MAX_SKILL_LEVEL))
            .unwrap_or(0)
    }
}

/// Per-member-per-service verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Full,
    Partial,
    None,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Fully Capable",
            Self::Partial => "Partially Capable",
            Self::None => "Not Capable",
        }
    }
}

/// Discrete delivery-capacity state of a service line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Readiness {
    Ready,
    Partial,
    NotReady,
    ComingSoon,
}

impl Readiness {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Partial => "Partial",
            Self::NotReady => "Not Ready",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug)]
pub enum CatalogueError {
    IdealBelowMinimum { service: String, skill: String },
    DuplicateSkill { service: String, skill: String },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::IdealBelowMinimum { service, skill } => write!(
                f,
                "service {} declares ideal level below minimum for skill {}",
                service, skill
            ),
            CatalogueError::DuplicateSkill { service, skill } => {
                write!(f, "service {} lists skill {} more than once", service, skill)
            }
        }
    }
}

impl std::error::Error for CatalogueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_entry_clamps_out_of_range_values() {
        let entry = SkillEntry::new("Tax Planning", 9, 7);
        assert_eq!(entry.level, MAX_SKILL_LEVEL);
        assert_eq!(entry.interest, MAX_SKILL_LEVEL);
    }

    #[test]
    fn missing_skill_reads_as_level_zero() {
        let member = TeamMember {
            id: "m1".to_string(),
            name: "Alice".to_string(),
            role: "Senior".to_string(),
            skills: vec![SkillEntry::new("Tax Planning", 4, 3)],
        };
        assert_eq!(member.level_for("Tax Planning"), 4);
        assert_eq!(member.level_for("Business Valuation"), 0);
        assert_eq!(member.interest_for("Business Valuation"), 0);
    }
}
