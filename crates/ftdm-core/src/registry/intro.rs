//! Introduction feature cards, headline stats and the quick start steps

use serde::Serialize;

use crate::content::{ContentRecord, DetailSection, IconName, Tone, VisualTag};

/// Headline figure shown on the introduction page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: IconName,
}

/// Feature cards; they have no detail panel
pub static FEATURES: &[ContentRecord] = &[
    ContentRecord::new(
        "fast-track",
        "Fast-Track Development",
        "Transform raw requirements into production-ready applications in minutes, not months.",
        VisualTag::new(IconName::Zap, Tone::Blue),
    ),
    ContentRecord::new(
        "domain-intelligence",
        "Domain Intelligence",
        "Automatically detects domain patterns and applies industry-specific best practices.",
        VisualTag::new(IconName::Brain, Tone::Purple),
    ),
    ContentRecord::new(
        "safeguards",
        "Anti-Hallucination Safeguards",
        "Comprehensive safeguards prevent AI errors and ensure maximum reliability.",
        VisualTag::new(IconName::Shield, Tone::Green),
    ),
    ContentRecord::new(
        "automation",
        "7-Stage Automation",
        "Complete automation from requirements to deployment with minimal user input.",
        VisualTag::new(IconName::Layers, Tone::Pink),
    ),
    ContentRecord::new(
        "quality-gates",
        "Quality Gates",
        "Built-in validation and quality assurance at every stage.",
        VisualTag::new(IconName::Target, Tone::Orange),
    ),
    ContentRecord::new(
        "compatibility",
        "Universal Compatibility",
        "Works with existing projects from any platform (Lovable, Replit, Figma, Base44).",
        VisualTag::new(IconName::Globe, Tone::Cyan),
    ),
];

pub static STATS: &[Stat] = &[
    Stat {
        value: "7",
        label: "Automated Stages",
        icon: IconName::Layers,
    },
    Stat {
        value: "13",
        label: "Implementation Sub-Stages",
        icon: IconName::Layers,
    },
    Stat {
        value: "100%",
        label: "Production Ready",
        icon: IconName::CheckCircle,
    },
    Stat {
        value: "10x",
        label: "Faster Development",
        icon: IconName::Rocket,
    },
    Stat {
        value: "100%",
        label: "Hallucination-Proof",
        icon: IconName::Shield,
    },
    Stat {
        value: "3",
        label: "Integration Scenarios",
        icon: IconName::Globe,
    },
];

const STEP_1: &[DetailSection] = &[
    DetailSection::icon(
        "Details",
        IconName::CheckCircle,
        &[
            "Create new project folder: [project_name]",
            "Copy EFTDM_FRAMEWORK folder into project directory",
            "Project structure: [project_name]/EFTDM_FRAMEWORK/",
            "Open README.md to understand framework",
        ],
    ),
];

const STEP_2: &[DetailSection] = &[
    DetailSection::icon(
        "Details",
        IconName::CheckCircle,
        &[
            "Example: \"I need a payroll system for my company with 50 employees\"",
            "Be specific about your business needs",
            "Include any existing project context",
            "Note any special requirements or constraints",
        ],
    ),
];

const STEP_3: &[DetailSection] = &[
    DetailSection::icon(
        "Details",
        IconName::CheckCircle,
        &[
            "Domain: \"Finance\", \"Healthcare\", \"E-commerce\", etc.",
            "AI-Agentic: \"Yes\" or \"No\" (does it need AI features?)",
            "Business Context: Brief description of your use case",
        ],
    ),
];

const STEP_4: &[DetailSection] = &[
    DetailSection::icon(
        "Details",
        IconName::CheckCircle,
        &[
            "Default: .NET Core 8.0 + Vue.js 3 + MongoDB + Azure",
            "Backend: .NET Core 8.0 + C# 12 + ASP.NET Core Web API",
            "Frontend: Vue.js 3 + Vuex 4 + Vue Router 4 + Axios 1.6",
            "Database: MongoDB with official .NET driver",
            "Authentication: JWT + Azure AD",
            "Deployment: Docker + Kubernetes + Azure App Services",
        ],
    ),
];

const STEP_5: &[DetailSection] = &[
    DetailSection::icon(
        "Details",
        IconName::CheckCircle,
        &[
            "7 automated stages with user confirmation",
            "Domain intelligence integration",
            "Quality gates and validation",
            "Production-ready application generation",
        ],
    ),
];

/// Five steps from an empty folder to a running framework
pub static QUICK_START: &[ContentRecord] = &[
    ContentRecord::new(
        "1",
        "Import Framework",
        "Copy EFTDM_FRAMEWORK folder into your project directory",
        VisualTag::new(IconName::Rocket, Tone::Green),
    )
    .with_sections(STEP_1),
    ContentRecord::new(
        "2",
        "Prepare Raw Requirements",
        "Write your raw requirements document",
        VisualTag::new(IconName::Rocket, Tone::Green),
    )
    .with_sections(STEP_2),
    ContentRecord::new(
        "3",
        "Answer 3 Questions",
        "Provide minimal clarifying information",
        VisualTag::new(IconName::Rocket, Tone::Green),
    )
    .with_sections(STEP_3),
    ContentRecord::new(
        "4",
        "Confirm Technology Stack",
        "Use default stack or specify your preferences",
        VisualTag::new(IconName::Rocket, Tone::Green),
    )
    .with_sections(STEP_4),
    ContentRecord::new(
        "5",
        "Framework Automation",
        "Framework handles everything else automatically",
        VisualTag::new(IconName::Rocket, Tone::Green),
    )
    .with_sections(STEP_5),
];
