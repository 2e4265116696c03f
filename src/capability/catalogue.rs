use super::domain::{CatalogueError, DeliveryRole, Seniority, ServiceLine, SkillRequirement};
use std::collections::BTreeSet;

use Seniority::{Director, Intermediate, Junior, Partner, Senior};

/// The practice's advisory service lines, each mapped to the skills the
/// assessment programme scores.
#[derive(Debug, Clone)]
pub struct ServiceCatalogue {
    services: Vec<ServiceLine>,
}

impl ServiceCatalogue {
    /// Builds a catalogue from externally authored service lines, rejecting
    /// data the engine is not defensive against (authoring-time mistakes).
    pub fn new(services: Vec<ServiceLine>) -> Result<Self, CatalogueError> {
        for service in &services {
            let mut seen = BTreeSet::new();
            for requirement in &service.required_skills {
                if requirement.ideal_level < requirement.minimum_level {
                    return Err(CatalogueError::IdealBelowMinimum {
                        service: service.id.clone(),
                        skill: requirement.skill_name.clone(),
                    });
                }
                if !seen.insert(requirement.skill_name.as_str()) {
                    return Err(CatalogueError::DuplicateSkill {
                        service: service.id.clone(),
                        skill: requirement.skill_name.clone(),
                    });
                }
            }
        }
        Ok(Self { services })
    }

    pub fn standard() -> Self {
        Self {
            services: standard_service_lines(),
        }
    }

    pub fn services(&self) -> &[ServiceLine] {
        &self.services
    }

    pub fn service(&self, id: &str) -> Option<&ServiceLine> {
        self.services.iter().find(|service| service.id == id)
    }

    /// Every distinct skill referenced by any service line, sorted.
    pub fn all_required_skills(&self) -> Vec<String> {
        let mut skills = BTreeSet::new();
        for service in &self.services {
            for requirement in &service.required_skills {
                skills.insert(requirement.skill_name.clone());
            }
        }
        skills.into_iter().collect()
    }

    pub fn services_for_skill(&self, skill_name: &str) -> Vec<&ServiceLine> {
        self.services
            .iter()
            .filter(|service| {
                service
                    .required_skills
                    .iter()
                    .any(|requirement| requirement.skill_name == skill_name)
            })
            .collect()
    }
}

fn req(
    skill_name: &str,
    minimum_level: u8,
    ideal_level: u8,
    critical_to_delivery: bool,
    recommended_seniority: &[Seniority],
) -> SkillRequirement {
    SkillRequirement {
        skill_name: skill_name.to_string(),
        minimum_level,
        ideal_level,
        critical_to_delivery,
        recommended_seniority: recommended_seniority.to_vec(),
    }
}

fn role(
    seniority: Seniority,
    hours_estimate: &str,
    responsibilities: &[&'static str],
) -> DeliveryRole {
    DeliveryRole {
        seniority,
        hours_estimate: hours_estimate.to_string(),
        responsibilities: responsibilities.to_vec(),
    }
}

fn service(
    id: &str,
    name: &str,
    description: &str,
    price_range: &str,
    delivery_time: &str,
    coming_soon: bool,
    required_skills: Vec<SkillRequirement>,
    delivery_team: Vec<DeliveryRole>,
) -> ServiceLine {
    ServiceLine {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_range: price_range.to_string(),
        delivery_time: delivery_time.to_string(),
        coming_soon,
        required_skills,
        delivery_team,
    }
}

fn standard_service_lines() -> Vec<ServiceLine> {
    vec![
        service(
            "automation",
            "Automation",
            "Data capture, system integration, and finance automation",
            "£115-£180/hour + setup costs",
            "Half-day to multi-day depending on scope",
            false,
            vec![
                req("System Implementation & Change Management", 3, 4, true, &[Senior, Director]),
                req("Technology & Digital Literacy", 4, 5, true, &[Intermediate, Senior]),
                req("Process Design & Optimisation", 3, 4, true, &[Senior, Director]),
                req("Workflow Optimisation", 3, 4, true, &[Intermediate, Senior]),
                req("Software Proficiency", 4, 5, true, &[Intermediate, Senior, Junior]),
                req("Data Management & Analysis", 3, 4, true, &[Intermediate, Senior]),
                req("Chart of Accounts Design", 3, 4, true, &[Senior, Director]),
                req("Client Communication", 3, 4, true, &[Senior, Director]),
                req("Training & Knowledge Transfer", 3, 4, false, &[Intermediate, Senior]),
                req("Problem Diagnosis & Troubleshooting", 3, 4, true, &[Intermediate, Senior]),
            ],
            vec![
                role(Director, "2-4 hours", &[
                    "Scope definition and system architecture",
                    "Client sign-off and project oversight",
                ]),
                role(Senior, "4-8 hours", &[
                    "Technical implementation and chart of accounts design",
                    "Categorisation rules, testing, and client training",
                ]),
                role(Intermediate, "3-6 hours", &[
                    "Data migration, bank feed configuration, dashboards",
                    "Documentation and acceptance testing support",
                ]),
                role(Junior, "2-4 hours", &[
                    "Data entry and verification",
                    "Onboarding admin and follow-up support",
                ]),
            ],
        ),
        service(
            "management-accounts",
            "Management Accounts",
            "Regular financial reporting with KPI analysis and insights",
            "£650/month (monthly) or £1,750/quarter",
            "Monthly or quarterly delivery",
            false,
            vec![
                req("Management Reporting", 4, 5, true, &[Senior, Director]),
                req("KPI Framework Design", 3, 4, true, &[Senior, Director]),
                req("Financial Analysis", 4, 5, true, &[Senior, Director]),
                req("Cash Flow Management", 4, 5, true, &[Senior, Director]),
                req("Variance Analysis", 4, 5, true, &[Senior, Director]),
                req("Commercial Acumen", 3, 4, true, &[Senior, Director, Partner]),
                req("Data Visualisation & Reporting", 3, 4, true, &[Intermediate, Senior]),
                req("Attention to Detail", 4, 5, true, &[Intermediate, Senior, Junior]),
                req("Written Communication", 3, 4, true, &[Senior, Director]),
                req("Business Understanding", 3, 4, true, &[Senior, Director, Partner]),
            ],
            vec![
                role(Director, "1-2 hours", &[
                    "Review and sign-off on the management pack",
                    "KPI commentary and strategic recommendations",
                ]),
                role(Senior, "3-5 hours", &[
                    "Prepare the pack, variance analysis, cash flow waterfall",
                    "Quality review of all outputs",
                ]),
                role(Intermediate, "2-3 hours", &[
                    "Data extraction, reconciliation, report generation",
                ]),
                role(Junior, "0.5-1 hour", &[
                    "Data verification, formatting, distribution",
                ]),
            ],
        ),
        service(
            "advisory-accelerator",
            "Future Financial Information / Advisory Accelerator",
            "Budgets, forecasts, valuations, and ongoing advisory support",
            "£1,000-£4,000 (forecasts) | £1,500-£9,000 (ongoing programs)",
            "One-off engagements or monthly/quarterly retainers",
            false,
            vec![
                req("Business Planning & Budgeting", 4, 5, true, &[Senior, Director, Partner]),
                req("Forecasting & Scenario Planning", 4, 5, true, &[Senior, Director, Partner]),
                req("Business Valuation", 3, 5, true, &[Director, Partner]),
                req("Cash Flow Management", 4, 5, true, &[Senior, Director]),
                req("Financial Modeling", 4, 5, true, &[Senior, Director]),
                req("Strategic Thinking", 4, 5, true, &[Director, Partner]),
                req("Commercial Acumen", 4, 5, true, &[Director, Partner]),
                req("Consulting & Advisory", 4, 5, true, &[Director, Partner]),
                req("Client Relationship Management", 4, 5, true, &[Director, Partner]),
                req("Presentation Skills", 3, 5, true, &[Director, Partner]),
                req("Facilitation Skills", 3, 4, false, &[Director, Partner]),
                req("Questioning & Listening", 4, 5, true, &[Director, Partner]),
            ],
            vec![
                role(Partner, "4-8 hours", &[
                    "Client relationship ownership and strategy sessions",
                    "Valuation sign-off and board-level presentations",
                ]),
                role(Director, "6-12 hours", &[
                    "Financial model construction and scenario planning",
                    "Assumptions workshops and quarterly business reviews",
                ]),
                role(Senior, "4-8 hours", &[
                    "Data gathering, sensitivity analysis, report preparation",
                ]),
                role(Intermediate, "2-4 hours", &[
                    "Historical data extraction and comparables research",
                ]),
            ],
        ),
        service(
            "benchmarking",
            "Benchmarking - External and Internal",
            "Comparative financial analysis across industry and internally",
            "£450 (base report) to £1,200-£1,500 (with consultation)",
            "2-3 days",
            false,
            vec![
                req("Benchmarking & Comparative Analysis", 4, 5, true, &[Senior, Director]),
                req("Industry Knowledge", 3, 4, true, &[Senior, Director, Partner]),
                req("Data Analysis & Interpretation", 4, 5, true, &[Senior, Director]),
                req("KPI Framework Design", 3, 4, true, &[Senior, Director]),
                req("Report Writing", 3, 4, true, &[Senior, Director]),
                req("Commercial Acumen", 3, 4, true, &[Senior, Director, Partner]),
                req("Data Visualisation & Reporting", 3, 4, false, &[Intermediate, Senior]),
                req("Critical Thinking", 3, 4, true, &[Senior, Director]),
            ],
            vec![
                role(Director, "1-2 hours", &[
                    "Consultation delivery, insights, and action plan",
                ]),
                role(Senior, "3-4 hours", &[
                    "Benchmarking analysis, comparables selection, report writing",
                ]),
                role(Intermediate, "2-3 hours", &[
                    "Data extraction, normalisation, charts, quality checks",
                ]),
            ],
        ),
        service(
            "profit-extraction",
            "Profit Extraction / Remuneration Strategies",
            "Tax-efficient director remuneration and profit extraction planning",
            "£0 (compliance advice) to £500 (advisory meeting)",
            "Ongoing advice or one-off consultations",
            false,
            vec![
                req("Tax Planning", 4, 5, true, &[Senior, Director, Partner]),
                req("Corporate Tax", 3, 4, true, &[Senior, Director]),
                req("Personal Tax", 3, 4, true, &[Senior, Director]),
                req("Dividend & Remuneration Planning", 4, 5, true, &[Senior, Director]),
                req("NICs & Payroll Tax", 3, 4, true, &[Senior, Director]),
                req("Pension Planning", 2, 3, false, &[Senior, Director]),
                req("Client Communication", 4, 5, true, &[Senior, Director, Partner]),
                req("Tax Legislation & Compliance", 4, 5, true, &[Senior, Director]),
                req("Commercial Awareness", 3, 4, false, &[Senior, Director, Partner]),
            ],
            vec![
                role(Partner, "0.5-1 hour", &[
                    "Advisory meetings and wealth management introductions",
                ]),
                role(Director, "1-2 hours", &[
                    "Extraction calculations, scenario modelling, recommendations",
                ]),
                role(Senior, "1-1.5 hours", &[
                    "Data gathering and current position analysis",
                ]),
                role(Intermediate, "0.5 hours", &[
                    "Compliance advice letters and template population",
                ]),
            ],
        ),
        service(
            "365-alignment",
            "365 Alignment Programme",
            "Structured personal-business planning with AI-generated execution plans",
            "£1,500 (Lite) | £4,500 (Growth) | £9,000 (Partner)",
            "Tiered delivery over 3-12 months",
            false,
            vec![
                req("Strategic Planning & Execution", 4, 5, true, &[Director, Partner]),
                req("Goal Setting & OKRs", 4, 5, true, &[Director, Partner]),
                req("Business Coaching", 3, 5, true, &[Director, Partner]),
                req("Facilitation Skills", 4, 5, true, &[Director, Partner]),
                req("Questioning & Listening", 4, 5, true, &[Director, Partner]),
                req("Business Planning & Budgeting", 4, 5, true, &[Director, Partner]),
                req("Performance Management", 3, 4, true, &[Director, Partner]),
                req("AI & Technology Integration", 3, 4, false, &[Senior, Director]),
                req("Client Relationship Management", 4, 5, true, &[Partner]),
                req("Accountability & Follow-Through", 4, 5, true, &[Director, Partner]),
            ],
            vec![
                role(Partner, "6-12 hours", &[
                    "Diagnostic sessions and strategy day facilitation",
                    "Quarterly business reviews and relationship stewardship",
                ]),
                role(Director, "4-8 hours", &[
                    "Plan review and customisation, accountability reviews",
                ]),
                role(Senior, "2-4 hours", &[
                    "Diagnostic data collection, portal setup, milestone tracking",
                ]),
                role(Intermediate, "1-2 hours", &[
                    "Administrative coordination and report generation",
                ]),
            ],
        ),
        service(
            "systems-audit",
            "Systems Audit",
            "Independent review of finance workflows to find root-causes of issues",
            "£7.5k-£25k (diagnostic + implementation)",
            "Multi-week engagement",
            true,
            vec![
                req("Process Design & Optimisation", 4, 5, true, &[Director, Partner]),
                req("Internal Controls & Risk Management", 4, 5, true, &[Director, Partner]),
                req("System Implementation & Change Management", 4, 5, true, &[Director, Partner]),
                req("Technology & Digital Literacy", 4, 5, true, &[Senior, Director]),
                req("Problem Diagnosis & Troubleshooting", 4, 5, true, &[Senior, Director]),
                req("Data Management & Analysis", 4, 5, true, &[Senior, Director]),
                req("Workflow Optimisation", 4, 5, true, &[Senior, Director]),
                req("Project Management", 4, 5, true, &[Director, Partner]),
                req("Fraud Detection & Prevention", 3, 4, true, &[Director, Partner]),
                req("Software Proficiency", 4, 5, true, &[Intermediate, Senior]),
                req("Stakeholder Interviewing", 4, 5, true, &[Director, Partner]),
                req("Report Writing", 4, 5, true, &[Senior, Director]),
            ],
            vec![
                role(Partner, "8-12 hours", &[
                    "Engagement leadership and remediation plan sign-off",
                ]),
                role(Director, "20-40 hours", &[
                    "Process mapping, stakeholder interviews, tech-stack review",
                    "Remediation plan authoring and project management",
                ]),
                role(Senior, "15-30 hours", &[
                    "Data extraction, walk-throughs, efficiency diagnostics",
                ]),
                role(Intermediate, "8-15 hours", &[
                    "Process documentation, scheduling, report formatting",
                ]),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalogue_passes_authoring_validation() {
        let catalogue = ServiceCatalogue::standard();
        ServiceCatalogue::new(catalogue.services().to_vec()).expect("standard catalogue is valid");
    }

    #[test]
    fn standard_catalogue_lists_seven_services() {
        let catalogue = ServiceCatalogue::standard();
        assert_eq!(catalogue.services().len(), 7);
        let systems_audit = catalogue.service("systems-audit").expect("systems audit present");
        assert!(systems_audit.coming_soon);
    }

    #[test]
    fn all_required_skills_is_sorted_and_distinct() {
        let catalogue = ServiceCatalogue::standard();
        let skills = catalogue.all_required_skills();
        assert!(!skills.is_empty());
        for window in skills.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn services_for_skill_finds_shared_requirements() {
        let catalogue = ServiceCatalogue::standard();
        let services = catalogue.services_for_skill("Cash Flow Management");
        let ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        assert!(ids.contains(&"management-accounts"));
        assert!(ids.contains(&"advisory-accelerator"));
    }

    #[test]
    fn new_rejects_duplicate_skill_names() {
        let mut services = standard_service_lines();
        let duplicate = services[0].required_skills[0].clone();
        services[0].required_skills.push(duplicate);
        let err = ServiceCatalogue::new(services).expect_err("duplicate skill rejected");
        assert!(matches!(err, CatalogueError::DuplicateSkill { .. }));
    }

    #[test]
    fn new_rejects_ideal_below_minimum() {
        let mut services = standard_service_lines();
        services[0].required_skills[0].minimum_level = 5;
        services[0].required_skills[0].ideal_level = 3;
        let err = ServiceCatalogue::new(services).expect_err("inverted levels rejected");
        assert!(matches!(err, CatalogueError::IdealBelowMinimum { .. }));
    }
}
