//! Curated business-focused term lists layered over a base ontology.
//!
//! These lists replace a domain's vocabulary wholesale before indexing,
//! keeping the matchable keyword space focused on delivery/management
//! language instead of the broader base vocabularies.

use indexmap::IndexMap;

const FOCUSED_TERMS: &[(&str, &[&str])] = &[
    (
        "Leadership & Influence",
        &[
            "project management",
            "project manager",
            "team leadership",
            "stakeholder management",
            "scrum master",
            "product owner",
            "manager",
            "director",
            "coordination",
            "planning",
            "execution",
            "delivery",
            "milestone",
            "leadership",
            "vision",
            "strategy",
            "oversight",
            "team lead",
            "cross-functional",
            "program management",
            "change management",
        ],
    ),
    (
        "Systems & Structure",
        &[
            "agile",
            "scrum",
            "waterfall",
            "kanban",
            "methodology",
            "process",
            "workflow",
            "SDLC",
            "requirements",
            "specifications",
            "deliverables",
            "timeline",
            "budget",
            "scope",
            "quality assurance",
            "testing",
            "deployment",
            "implementation",
            "integration",
            "project lifecycle",
            "framework",
            "standards",
            "configuration",
            "governance",
        ],
    ),
    (
        "AI & Technical Literacy",
        &[
            "technology",
            "software",
            "IT",
            "information technology",
            "technical",
            "systems",
            "development",
            "programming",
            "database",
            "cloud",
            "security",
            "networking",
            "applications",
            "digital",
            "engineering",
            "hardware",
            "technical requirements",
        ],
    ),
    (
        "Communication Strategy",
        &[
            "communication",
            "collaboration",
            "documentation",
            "reporting",
            "meeting",
            "stakeholder",
            "team",
            "coordination",
            "facilitation",
            "presentation",
            "client",
            "customer",
            "vendor",
            "partner",
            "interdisciplinary",
        ],
    ),
    (
        "Data & Evidence",
        &[
            "analysis",
            "reporting",
            "metrics",
            "performance",
            "measurement",
            "evaluation",
            "quality",
            "testing",
            "documentation",
            "data",
            "tracking",
            "monitoring",
            "KPIs",
            "dashboard",
            "assessment",
            "review",
            "audit",
            "validation",
        ],
    ),
    (
        "Outcomes & Impact",
        &[
            "results",
            "outcomes",
            "success",
            "performance",
            "improvement",
            "efficiency",
            "productivity",
            "ROI",
            "value",
            "impact",
            "goals",
            "objectives",
            "delivery",
            "achievements",
            "optimization",
            "cost reduction",
            "benefit",
        ],
    ),
    (
        "Risk & Compliance",
        &[
            "risk management",
            "compliance",
            "standards",
            "policies",
            "procedures",
            "security",
            "safety",
            "audit",
            "quality",
            "regulatory",
            "governance",
        ],
    ),
    (
        "Adaptation & Flexibility",
        &[
            "change",
            "flexibility",
            "adaptability",
            "problem solving",
            "troubleshooting",
            "innovation",
            "improvement",
            "scalability",
            "agility",
            "evolution",
        ],
    ),
    (
        "Collaboration & Relational Work",
        &[
            "teamwork",
            "collaboration",
            "partnership",
            "coordination",
            "support",
            "communication",
            "relationship",
            "shared goals",
            "trust",
        ],
    ),
];

/// The focused override map, suitable for [`crate::ontology::apply_overrides`].
pub fn focused_overrides() -> IndexMap<String, Vec<String>> {
    FOCUSED_TERMS
        .iter()
        .map(|(domain, terms)| {
            (
                (*domain).to_string(),
                terms.iter().map(|t| (*t).to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_cover_all_curated_domains() {
        let overrides = focused_overrides();
        assert_eq!(overrides.len(), 9);
        assert!(overrides.contains_key("Leadership & Influence"));
        assert!(overrides.contains_key("Collaboration & Relational Work"));
    }

    #[test]
    fn test_no_curated_list_is_empty() {
        for (domain, terms) in focused_overrides() {
            assert!(!terms.is_empty(), "empty term list for {domain}");
        }
    }
}
