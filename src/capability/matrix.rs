use super::catalogue::ServiceCatalogue;
use super::classifier::{classify, CapabilityResult};
use super::config::EngineConfig;
use super::domain::{Classification, ServiceLine, TeamMember};
use super::gaps::{analyze_gaps, recommendations};
use super::readiness::aggregate;
use super::views::{
    CapabilityMatrixRow, CapableMemberView, ServiceReadinessRow, ServiceSummaryView,
    SkillCoverageEntry,
};

/// Stateless orchestrator running the classifier across every
/// (member, service) pair and assembling the two result views. Holds no
/// state between invocations; identical inputs yield identical outputs.
pub struct CapabilityEngine {
    config: EngineConfig,
}

impl CapabilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// One row per service line for the capability matrix page.
    pub fn capability_matrix(
        &self,
        catalogue: &ServiceCatalogue,
        team: &[TeamMember],
    ) -> Vec<CapabilityMatrixRow> {
        catalogue
            .services()
            .iter()
            .map(|service| {
                let results = self.classify_team(service, team);
                let summary = aggregate(service, team, &results);

                CapabilityMatrixRow {
                    service: ServiceSummaryView::from_service(service),
                    readiness: summary.readiness,
                    readiness_label: summary.readiness.label(),
                    readiness_percent: summary.readiness_percent,
                    capable_members: summary.capable_members,
                    partial_capable_members: summary.partial_capable_members,
                    skill_coverage: skill_coverage(service, team),
                }
            })
            .collect()
    }

    /// One richer row per service line for the readiness dashboard.
    pub fn service_readiness(
        &self,
        catalogue: &ServiceCatalogue,
        team: &[TeamMember],
    ) -> Vec<ServiceReadinessRow> {
        catalogue
            .services()
            .iter()
            .map(|service| {
                let results = self.classify_team(service, team);
                let summary = aggregate(service, team, &results);
                let gaps = analyze_gaps(service, team, &self.config);
                let recommendations = recommendations(&gaps);

                ServiceReadinessRow {
                    service: ServiceSummaryView::from_service(service),
                    readiness: summary.readiness,
                    readiness_label: summary.readiness.label(),
                    readiness_percent: summary.readiness_percent,
                    skills_ready: summary.skills_ready,
                    total_skills: summary.total_skills,
                    critical_skills_met: summary.critical_skills_met,
                    total_critical_skills: summary.total_critical_skills,
                    capable_members: summary.capable_members,
                    partial_capable_members: summary.partial_capable_members,
                    team_members_capable: self.rank_capable_members(service, team, &results),
                    gaps,
                    recommendations,
                    can_deliver_now: summary.can_deliver_now,
                }
            })
            .collect()
    }

    fn classify_team(&self, service: &ServiceLine, team: &[TeamMember]) -> Vec<CapabilityResult> {
        team.iter()
            .map(|member| classify(member, service, &self.config))
            .collect()
    }

    /// Fully capable members first, then partial, the whole list ranked by
    /// interest in the service. The sort is stable so roster order breaks
    /// ties deterministically.
    fn rank_capable_members(
        &self,
        service: &ServiceLine,
        team: &[TeamMember],
        results: &[CapabilityResult],
    ) -> Vec<CapableMemberView> {
        let mut ranked: Vec<(u8, &TeamMember, &CapabilityResult)> = Vec::new();

        for classification in [Classification::Full, Classification::Partial] {
            for (member, result) in team.iter().zip(results) {
                if result.classification == classification {
                    ranked.push((service_interest(member, service), member, result));
                }
            }
        }

        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        ranked
            .into_iter()
            .enumerate()
            .map(|(index, (interest, member, result))| CapableMemberView {
                member_id: member.id.clone(),
                member_name: member.name.clone(),
                skills_covered: result.skills_covered,
                total_required: result.total_required,
                has_high_interest: result.has_high_interest,
                interest_rank: index + 1,
                desired_involvement: u16::from(interest) * u16::from(self.config.involvement_scale),
                experience_level: experience_level(member, service),
            })
            .collect()
    }
}

impl Default for CapabilityEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// A member's interest in a service is their strongest interest across its
/// required skills.
fn service_interest(member: &TeamMember, service: &ServiceLine) -> u8 {
    service
        .required_skills
        .iter()
        .map(|requirement| member.interest_for(&requirement.skill_name))
        .max()
        .unwrap_or(0)
}

/// Level for the highest-weighted requirement: greatest ideal level,
/// critical requirements winning ties, then catalogue order.
fn experience_level(member: &TeamMember, service: &ServiceLine) -> u8 {
    service
        .required_skills
        .iter()
        .enumerate()
        .max_by_key(|(index, requirement)| {
            (
                requirement.ideal_level,
                requirement.critical_to_delivery,
                std::cmp::Reverse(*index),
            )
        })
        .map(|(_, requirement)| member.level_for(&requirement.skill_name))
        .unwrap_or(0)
}

fn skill_coverage(service: &ServiceLine, team: &[TeamMember]) -> Vec<SkillCoverageEntry> {
    service
        .required_skills
        .iter()
        .map(|requirement| SkillCoverageEntry {
            skill_name: requirement.skill_name.clone(),
            minimum_level: requirement.minimum_level,
            is_critical: requirement.critical_to_delivery,
            qualified_members: team
                .iter()
                .filter(|member| {
                    member.level_for(&requirement.skill_name) >= requirement.minimum_level
                })
                .map(|member| member.name.clone())
                .collect(),
        })
        .collect()
}
