//! Usage guidance for catalog roles.

pub mod router;

pub use router::guidance_router;

use serde::Serialize;

/// Tips, a worked example and quick-start lines for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGuide {
    pub role: String,
    pub curated: bool,
    pub tips: &'static [&'static str],
    pub example: &'static str,
    pub quick_starts: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightedRole {
    pub role: &'static str,
    pub description: &'static str,
    pub best_for: &'static str,
}

pub const HIGHLIGHTED_ROLES: &[HighlightedRole] = &[
    HighlightedRole {
        role: "Business Analyst",
        description: "Process analysis, competitor research and strategy development",
        best_for: "Market analysis, KPI tracking, process optimization",
    },
    HighlightedRole {
        role: "Marketing Expert",
        description: "Digital marketing, campaign management and brand strategy",
        best_for: "Social media, email marketing, content marketing",
    },
    HighlightedRole {
        role: "Sales Representative",
        description: "Sales techniques, customer communication and deal closing",
        best_for: "Proposal writing, objection handling, CRM strategy",
    },
    HighlightedRole {
        role: "Project Manager",
        description: "Project planning, team coordination and risk management",
        best_for: "Sprint planning, timelines, resource allocation",
    },
];

struct CuratedTips {
    role: &'static str,
    tips: &'static [&'static str],
    example: &'static str,
}

const CURATED_TIPS: &[CuratedTips] = &[
    CuratedTips {
        role: "Business Analyst",
        tips: &[
            "Name the industry and the company size",
            "Add numeric goals and KPIs",
            "Give a time frame (monthly, quarterly, yearly)",
            "Name competitors explicitly",
        ],
        example: "Analyze our sales data for the last 6 months and compare it with our technology-sector competitors (Microsoft, Google) to recommend a strategy for 2024 Q4.",
    },
    CuratedTips {
        role: "Marketing Expert",
        tips: &[
            "Describe the target audience demographics",
            "State a budget range",
            "List the platforms you use",
            "Share current performance metrics",
        ],
        example: "Design a B2B LinkedIn campaign with a $10,000 budget for technology professionals aged 25-40. Current CTR is 2.1%.",
    },
    CuratedTips {
        role: "Content Creator",
        tips: &[
            "Set the tone and style (formal, friendly, playful)",
            "Set a word limit",
            "Provide SEO keywords",
            "Explain the call-to-action goal",
        ],
        example: "Write an 800 word SEO-focused blog post about digital transformation. Keywords: 'artificial intelligence', 'automation'. Goal: demo requests.",
    },
    CuratedTips {
        role: "Sales Representative",
        tips: &[
            "Describe the customer profile",
            "Give the product or service price range",
            "Say which stage of the sales process you are in",
            "Share earlier objections",
        ],
        example: "Prepare a pitch of our SaaS product ($500 per month) for the CTO of a 50-100 person technology company. Main objection: 'Too expensive'.",
    },
    CuratedTips {
        role: "Project Manager",
        tips: &[
            "Give the team size and structure",
            "Provide project duration and budget",
            "List risk factors",
            "Name the methodology (Agile, Waterfall)",
        ],
        example: "Create an Agile sprint plan for a 6-month e-commerce project with 8 developers. Budget: $50,000. Risk: API integration.",
    },
];

const GENERIC_TIPS: &[&str] = &[
    "Be specific",
    "Give examples",
    "State the goal",
    "Provide context",
];

const GENERIC_EXAMPLE: &str = "No role-specific example yet.";

const QUICK_STARTS: &[(&str, &[&str])] = &[
    (
        "Business Analyst",
        &[
            "Analyze our company's position in the [industry] market",
            "Run a SWOT analysis comparing us with [competitor]",
            "Recommend a market penetration strategy for [product/service]",
        ],
    ),
    (
        "Marketing Expert",
        &[
            "Create a [platform] campaign strategy for [target audience]",
            "Prepare a 30-day marketing calendar for the [product] launch",
            "Suggest 10 tactics to raise our social media engagement",
        ],
    ),
    (
        "Content Creator",
        &[
            "Write a [word count] word blog post about [topic]",
            "Create a weekly content calendar for [platform]",
            "Suggest effective headlines for [target audience]",
        ],
    ),
];

const GENERIC_QUICK_STARTS: &[&str] = &[
    "Start asking questions specific to this role",
    "Define a specific task",
    "State your expectations clearly",
];

/// Guide for `role`; unknown roles get the generic guidance.
pub fn guide_for(role: &str) -> RoleGuide {
    let curated = CURATED_TIPS.iter().find(|entry| entry.role == role);
    let quick_starts = QUICK_STARTS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, lines)| *lines)
        .unwrap_or(GENERIC_QUICK_STARTS);

    RoleGuide {
        role: role.to_string(),
        curated: curated.is_some(),
        tips: curated.map_or(GENERIC_TIPS, |entry| entry.tips),
        example: curated.map_or(GENERIC_EXAMPLE, |entry| entry.example),
        quick_starts,
    }
}
