use serde::{Deserialize, Serialize};

/// Thresholds driving classification, staffing targets, and interest
/// ranking. One structure injected into the engine rather than constants
/// re-declared at every call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Qualified members wanted for a critical skill; a single qualified
    /// person is a single point of failure.
    pub critical_staffing_target: usize,
    /// Qualified members wanted for a non-critical skill.
    pub standard_staffing_target: usize,
    /// Interest level (0-5) at and above which a member counts as highly
    /// interested in a required skill.
    pub high_interest_threshold: u8,
    /// Maps 0-5 interest onto a 0-100% desired-involvement figure.
    pub involvement_scale: u8,
}

impl EngineConfig {
    pub fn staffing_target(&self, critical: bool) -> usize {
        if critical {
            self.critical_staffing_target
        } else {
            self.standard_staffing_target
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            critical_staffing_target: 2,
            standard_staffing_target: 1,
            high_interest_threshold: 4,
            involvement_scale: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_thresholds() {
        let config = EngineConfig::default();
        assert_eq!(config.critical_staffing_target, 2);
        assert_eq!(config.standard_staffing_target, 1);
        assert_eq!(config.high_interest_threshold, 4);
        assert_eq!(config.involvement_scale, 20);
    }

    #[test]
    fn staffing_target_depends_on_criticality() {
        let config = EngineConfig::default();
        assert_eq!(config.staffing_target(true), 2);
        assert_eq!(config.staffing_target(false), 1);
    }
}
