//! Canned recommendations per readiness category.

use super::category::Category;

const TECHNICAL_INFRASTRUCTURE: &[&str] = &[
    "Develop API strategy for AI implementation",
    "Assess and upgrade computing resources as needed",
    "Implement modern data pipeline architecture",
    "Evaluate cloud vs. on-premise options for AI workloads",
];

const DATA_READINESS: &[&str] = &[
    "Conduct comprehensive data quality assessment",
    "Implement metadata enrichment program",
    "Develop data governance standards",
    "Create unified content taxonomy",
];

const ORGANIZATIONAL_ALIGNMENT: &[&str] = &[
    "Create cross-functional AI implementation team",
    "Develop AI champions program among editorial staff",
    "Create executive education program on media AI applications",
    "Establish clear AI vision with executive sponsorship",
];

const USE_CASES: &[&str] = &[
    "Prioritize use cases based on business impact",
    "Develop clear success metrics for AI initiatives",
    "Create MVP implementation roadmap",
    "Establish feedback loops for use case refinement",
];

const GOVERNANCE: &[&str] = &[
    "Develop AI ethics guidelines specific to media context",
    "Implement AI quality assurance framework",
    "Create AI review board with editorial representation",
    "Establish regular AI oversight reporting process",
];

/// The four recommendations shown when `category` is the priority focus.
pub fn recommendations_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::TechnicalInfrastructure => TECHNICAL_INFRASTRUCTURE,
        Category::DataReadiness => DATA_READINESS,
        Category::OrganizationalAlignment => ORGANIZATIONAL_ALIGNMENT,
        Category::UseCases => USE_CASES,
        Category::Governance => GOVERNANCE,
    }
}
