use super::config::EngineConfig;
use super::domain::{Classification, ServiceLine, TeamMember};
use serde::{Deserialize, Serialize};

/// Per-member verdict for one service line. Recomputed on every matrix
/// build, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityResult {
    pub member_id: String,
    pub skills_covered: usize,
    pub total_required: usize,
    pub meets_all_critical: bool,
    pub has_high_interest: bool,
    pub classification: Classification,
}

/// Decides whether a member is fully, partially, or not capable of
/// delivering a service line.
///
/// A requirement is met when the member's effective level reaches the
/// minimum; skills the member was never assessed on count as level zero.
/// Any unmet critical requirement forces `None` regardless of coverage.
pub fn classify(
    member: &TeamMember,
    service: &ServiceLine,
    config: &EngineConfig,
) -> CapabilityResult {
    let total_required = service.required_skills.len();
    let mut skills_covered = 0;
    let mut meets_all_critical = true;
    let mut has_high_interest = false;

    for requirement in &service.required_skills {
        let level = member.level_for(&requirement.skill_name);
        if level >= requirement.minimum_level {
            skills_covered += 1;
        } else if requirement.critical_to_delivery {
            meets_all_critical = false;
        }

        if member.interest_for(&requirement.skill_name) >= config.high_interest_threshold {
            has_high_interest = true;
        }
    }

    let classification = if skills_covered == total_required && meets_all_critical {
        Classification::Full
    } else if meets_all_critical && skills_covered >= total_required.div_ceil(2) {
        Classification::Partial
    } else {
        Classification::None
    };

    CapabilityResult {
        member_id: member.id.clone(),
        skills_covered,
        total_required,
        meets_all_critical,
        has_high_interest,
        classification,
    }
}
