use super::config::EngineConfig;
use super::domain::{ServiceLine, TeamMember};
use serde::{Deserialize, Serialize};

/// Shortfall between qualified-member count and the staffing target for one
/// required skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    pub skill_name: String,
    pub required: u8,
    pub is_critical: bool,
    pub members_with_skill: Vec<String>,
    pub members_meeting_minimum: usize,
    pub gap: usize,
    pub average_level: f32,
}

/// Walks the service's requirements and reports every skill staffed below
/// target. Critical skills target two qualified members so one departure
/// cannot stall delivery; non-critical skills target one.
pub fn analyze_gaps(
    service: &ServiceLine,
    team: &[TeamMember],
    config: &EngineConfig,
) -> Vec<GapEntry> {
    let mut gaps = Vec::new();

    for requirement in &service.required_skills {
        let mut members_with_skill = Vec::new();
        let mut level_sum = 0u32;
        let mut members_meeting_minimum = 0;

        for member in team {
            let level = member.level_for(&requirement.skill_name);
            if level > 0 {
                members_with_skill.push(member.name.clone());
                level_sum += u32::from(level);
            }
            if level >= requirement.minimum_level {
                members_meeting_minimum += 1;
            }
        }

        let staffing_target = config.staffing_target(requirement.critical_to_delivery);
        let gap = staffing_target.saturating_sub(members_meeting_minimum);
        if gap == 0 {
            continue;
        }

        let average_level = if members_with_skill.is_empty() {
            0.0
        } else {
            level_sum as f32 / members_with_skill.len() as f32
        };

        gaps.push(GapEntry {
            skill_name: requirement.skill_name.clone(),
            required: requirement.minimum_level,
            is_critical: requirement.critical_to_delivery,
            members_with_skill,
            members_meeting_minimum,
            gap,
            average_level,
        });
    }

    gaps
}

/// Natural-language remediation advice, ordered by urgency: unstaffed
/// critical skills first, then single-point-of-failure critical skills,
/// then non-critical development needs. Terminal output only; nothing
/// downstream parses these strings.
pub fn recommendations(gaps: &[GapEntry]) -> Vec<String> {
    let mut recommendations = Vec::new();

    for gap in gaps.iter().filter(|gap| gap.is_critical) {
        if gap.members_meeting_minimum == 0 {
            recommendations.push(format!(
                "No team member currently meets the minimum level for {} — urgent training or hire needed.",
                gap.skill_name
            ));
        }
    }

    for gap in gaps.iter().filter(|gap| gap.is_critical) {
        if gap.members_meeting_minimum == 1 {
            recommendations.push(format!(
                "Only one team member can deliver {} — cross-train a second person to remove single-point-of-failure risk.",
                gap.skill_name
            ));
        }
    }

    for gap in gaps.iter().filter(|gap| !gap.is_critical) {
        if gap.members_meeting_minimum == 0 {
            recommendations.push(format!(
                "{} has no qualified team member yet — consider development or external support.",
                gap.skill_name
            ));
        } else {
            // Only reachable with a raised standard staffing target.
            let target = gap.members_meeting_minimum + gap.gap;
            recommendations.push(format!(
                "{} is staffed below the target of {} — develop additional capacity or use external support.",
                gap.skill_name, target
            ));
        }
    }

    recommendations
}
