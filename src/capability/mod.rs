pub mod catalogue;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod gaps;
pub mod matrix;
pub mod readiness;
pub mod views;

pub use catalogue::ServiceCatalogue;
pub use classifier::{classify, CapabilityResult};
pub use config::EngineConfig;
pub use domain::{
    Classification, Readiness, Seniority, ServiceLine, SkillEntry, SkillRequirement, TeamMember,
};
pub use gaps::{analyze_gaps, recommendations, GapEntry};
pub use matrix::CapabilityEngine;
pub use readiness::{aggregate, ReadinessSummary};
pub use views::{CapabilityMatrixRow, CapableMemberView, ServiceReadinessRow};
