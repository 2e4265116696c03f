use super::domain::{Readiness, ServiceLine};
use super::gaps::GapEntry;
use serde::Serialize;

/// Catalogue fields the presentation pages show in row headers.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummaryView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub delivery_time: String,
    pub coming_soon: bool,
}

impl ServiceSummaryView {
    pub(crate) fn from_service(service: &ServiceLine) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            price_range: service.price_range.clone(),
            delivery_time: service.delivery_time.clone(),
            coming_soon: service.coming_soon,
        }
    }
}

/// Per-requirement qualified-member listing backing the capability matrix
/// detail dialog.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCoverageEntry {
    pub skill_name: String,
    pub minimum_level: u8,
    pub is_critical: bool,
    pub qualified_members: Vec<String>,
}

/// One row of the capability matrix view.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityMatrixRow {
    pub service: ServiceSummaryView,
    pub readiness: Readiness,
    pub readiness_label: &'static str,
    pub readiness_percent: f32,
    pub capable_members: Vec<String>,
    pub partial_capable_members: Vec<String>,
    pub skill_coverage: Vec<SkillCoverageEntry>,
}

/// Per-member breakdown shown on the service readiness page, ranked by
/// interest within the service.
#[derive(Debug, Clone, Serialize)]
pub struct CapableMemberView {
    pub member_id: String,
    pub member_name: String,
    pub skills_covered: usize,
    pub total_required: usize,
    pub has_high_interest: bool,
    /// 1 = highest interest among members capable of this service.
    pub interest_rank: usize,
    /// Self-reported interest scaled to a 0-100% involvement figure.
    pub desired_involvement: u16,
    /// Level for the service's highest-weighted required skill; display
    /// tie-breaker only, not part of the classification.
    pub experience_level: u8,
}

/// One row of the service readiness list.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceReadinessRow {
    pub service: ServiceSummaryView,
    pub readiness: Readiness,
    pub readiness_label: &'static str,
    pub readiness_percent: f32,
    pub skills_ready: usize,
    pub total_skills: usize,
    pub critical_skills_met: usize,
    pub total_critical_skills: usize,
    pub capable_members: Vec<String>,
    pub partial_capable_members: Vec<String>,
    pub team_members_capable: Vec<CapableMemberView>,
    pub gaps: Vec<GapEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    pub can_deliver_now: bool,
}
