use super::classifier::CapabilityResult;
use super::domain::{Classification, Readiness, ServiceLine, TeamMember};
use serde::{Deserialize, Serialize};

/// Aggregate delivery picture for one service line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSummary {
    pub readiness: Readiness,
    /// 100 x full members / team size, stored unrounded so downstream
    /// arithmetic never compounds rounding error.
    pub readiness_percent: f32,
    pub capable_members: Vec<String>,
    pub partial_capable_members: Vec<String>,
    pub can_deliver_now: bool,
    pub skills_ready: usize,
    pub total_skills: usize,
    pub critical_skills_met: usize,
    pub total_critical_skills: usize,
}

/// Folds every member's classification into the service-level readiness
/// picture. `results` is positionally aligned with `team`; member name
/// lists keep roster order.
pub fn aggregate(
    service: &ServiceLine,
    team: &[TeamMember],
    results: &[CapabilityResult],
) -> ReadinessSummary {
    let mut capable_members = Vec::new();
    let mut partial_capable_members = Vec::new();

    for (member, result) in team.iter().zip(results) {
        match result.classification {
            Classification::Full => capable_members.push(member.name.clone()),
            Classification::Partial => partial_capable_members.push(member.name.clone()),
            Classification::None => {}
        }
    }

    let can_deliver_now = !capable_members.is_empty();
    let readiness_percent = 100.0 * capable_members.len() as f32 / team.len().max(1) as f32;

    // coming_soon is an authoring decision; a qualified team never
    // overrides it.
    let readiness = if service.coming_soon {
        Readiness::ComingSoon
    } else if can_deliver_now {
        Readiness::Ready
    } else if !partial_capable_members.is_empty() {
        Readiness::Partial
    } else {
        Readiness::NotReady
    };

    let total_skills = service.required_skills.len();
    let total_critical_skills = service.critical_requirements().count();
    let mut skills_ready = 0;
    let mut critical_skills_met = 0;

    for requirement in &service.required_skills {
        let staffed = team
            .iter()
            .any(|member| member.level_for(&requirement.skill_name) >= requirement.minimum_level);
        if staffed {
            skills_ready += 1;
            if requirement.critical_to_delivery {
                critical_skills_met += 1;
            }
        }
    }

    ReadinessSummary {
        readiness,
        readiness_percent,
        capable_members,
        partial_capable_members,
        can_deliver_now,
        skills_ready,
        total_skills,
        critical_skills_met,
        total_critical_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::classifier::classify;
    use crate::capability::config::EngineConfig;
    use crate::capability::domain::{Seniority, SkillEntry, SkillRequirement};

    fn requirement(name: &str, minimum: u8, critical: bool) -> SkillRequirement {
        SkillRequirement {
            skill_name: name.to_string(),
            minimum_level: minimum,
            ideal_level: minimum,
            critical_to_delivery: critical,
            recommended_seniority: vec![Seniority::Senior],
        }
    }

    fn service(coming_soon: bool, requirements: Vec<SkillRequirement>) -> ServiceLine {
        ServiceLine {
            id: "svc".to_string(),
            name: "Service".to_string(),
            description: String::new(),
            price_range: String::new(),
            delivery_time: String::new(),
            coming_soon,
            required_skills: requirements,
            delivery_team: Vec::new(),
        }
    }

    fn member(name: &str, skills: Vec<SkillEntry>) -> TeamMember {
        TeamMember {
            id: name.to_lowercase(),
            name: name.to_string(),
            role: "Senior".to_string(),
            skills,
        }
    }

    fn classify_team(
        service: &ServiceLine,
        team: &[TeamMember],
    ) -> Vec<CapabilityResult> {
        let config = EngineConfig::default();
        team.iter()
            .map(|member| classify(member, service, &config))
            .collect()
    }

    #[test]
    fn one_full_member_makes_the_service_ready() {
        let service = service(false, vec![requirement("Tax Planning", 3, true)]);
        let team = vec![
            member("Alice", vec![SkillEntry::new("Tax Planning", 4, 0)]),
            member("Bob", vec![SkillEntry::new("Tax Planning", 1, 0)]),
        ];
        let results = classify_team(&service, &team);

        let summary = aggregate(&service, &team, &results);
        assert_eq!(summary.readiness, Readiness::Ready);
        assert!(summary.can_deliver_now);
        assert_eq!(summary.capable_members, vec!["Alice"]);
        assert!((summary.readiness_percent - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn coming_soon_overrides_a_qualified_team() {
        let service = service(true, vec![requirement("Tax Planning", 3, true)]);
        let team = vec![member("Alice", vec![SkillEntry::new("Tax Planning", 5, 5)])];
        let results = classify_team(&service, &team);

        let summary = aggregate(&service, &team, &results);
        assert_eq!(summary.readiness, Readiness::ComingSoon);
        assert!(summary.can_deliver_now);
        assert!((summary.readiness_percent - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_members_without_full_members_read_partial() {
        let service = service(false, vec![
            requirement("Tax Planning", 3, true),
            requirement("VAT", 2, false),
        ]);
        let team = vec![member("Alice", vec![SkillEntry::new("Tax Planning", 3, 0)])];
        let results = classify_team(&service, &team);

        let summary = aggregate(&service, &team, &results);
        assert_eq!(summary.readiness, Readiness::Partial);
        assert!(!summary.can_deliver_now);
        assert_eq!(summary.partial_capable_members, vec!["Alice"]);
    }

    #[test]
    fn empty_roster_never_divides_by_zero() {
        let service = service(false, vec![requirement("Tax Planning", 3, true)]);
        let summary = aggregate(&service, &[], &[]);
        assert_eq!(summary.readiness, Readiness::NotReady);
        assert_eq!(summary.readiness_percent, 0.0);
        assert!(summary.capable_members.is_empty());
        assert!(summary.partial_capable_members.is_empty());
    }

    #[test]
    fn skill_coverage_counts_track_requirements() {
        let service = service(false, vec![
            requirement("Tax Planning", 3, true),
            requirement("VAT", 2, false),
            requirement("Business Valuation", 4, true),
        ]);
        let team = vec![
            member("Alice", vec![
                SkillEntry::new("Tax Planning", 4, 0),
                SkillEntry::new("VAT", 2, 0),
            ]),
        ];
        let results = classify_team(&service, &team);

        let summary = aggregate(&service, &team, &results);
        assert_eq!(summary.skills_ready, 2);
        assert_eq!(summary.total_skills, 3);
        assert_eq!(summary.critical_skills_met, 1);
        assert_eq!(summary.total_critical_skills, 2);
    }
}
