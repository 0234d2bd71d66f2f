use serde::Serialize;

/// A weak prompt next to a reworked version of the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowcaseExample {
    pub title: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowcaseTier {
    pub label: &'static str,
    pub examples: &'static [ShowcaseExample],
}

const TIERS: &[ShowcaseTier] = &[
    ShowcaseTier {
        label: "Beginner",
        examples: &[
            ShowcaseExample {
                title: "Simple blog post",
                before: "Write a blog post.",
                after: "Write a 500 word blog post for our target audience of startup founders aged 25-40. Use a markdown format and include one example.",
            },
            ShowcaseExample {
                title: "Simple analysis",
                before: "Analyze this data.",
                after: "Analyze our Q1-Q3 2024 sales data for our business, a 50-person startup. Highlight which customer segment grew, for example mid-market accounts, and return 3 findings plus 5 actions in a table format.",
            },
        ],
    },
    ShowcaseTier {
        label: "Intermediate",
        examples: &[ShowcaseExample {
            title: "Marketing campaign",
            before: "Design a social media campaign for a new tech product. Young crowd.",
            after: "Design an Instagram and LinkedIn launch campaign for our AI chatbot, aimed at a target audience of early adopters aged 25-35. Budget: 15000 USD over 6 weeks. Goal: 1000 demo sign-ups. Give one example post per channel in a bullet list.",
        }],
    },
    ShowcaseTier {
        label: "Advanced",
        examples: &[ShowcaseExample {
            title: "Business growth strategy",
            before: "Create a growth plan for our company.",
            after: "Create a Q4 2024 growth plan for our 100-person SaaS company. Current MRR is $50K, target $75K; CAC $150, LTV $2400, churn 5%. Main competitors: Salesforce, HubSpot. Output a SWOT analysis plus a 90-day action plan in markdown format, with an example budget split.",
        }],
    },
];

/// Before/after prompt pairs grouped by difficulty.
pub fn showcase() -> &'static [ShowcaseTier] {
    TIERS
}
