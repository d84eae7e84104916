//! Benefit categories and the concrete outcomes a framework run delivers

use crate::content::{ContentRecord, DetailSection, IconName, Tone, VisualTag};

const BENEFIT_SPEED: &[DetailSection] = &[
    DetailSection::icon(
        "Highlights",
        IconName::Star,
        &[
            "10x Faster Development (10x): Complete automation reduces development time from months to minutes",
            "5 Minutes Setup (5 min): Total user input time is only 5 minutes for complete application",
            "Automated Stages (7 stages): 7 stages fully automated with minimal user intervention",
        ],
    ),
];

const BENEFIT_QUALITY: &[DetailSection] = &[
    DetailSection::icon(
        "Highlights",
        IconName::Star,
        &[
            "100% Production Ready (100%): All generated applications are production-ready with enterprise standards",
            "Hallucination-Proof (100%): Comprehensive safeguards prevent AI errors and hallucinations",
            "Quality Gates (7 gates): Built-in validation and quality assurance at every stage",
        ],
    ),
];

const BENEFIT_DOMAIN: &[DetailSection] = &[
    DetailSection::icon(
        "Highlights",
        IconName::Star,
        &[
            "Auto Domain Detection (Auto): Automatically detects domain and applies industry-specific patterns",
            "Industry Standards (All): Applies industry-specific patterns and compliance requirements",
            "Smart AI Detection (Smart): Only applies AI patterns when relevant to project requirements",
        ],
    ),
];

const BENEFIT_COMPATIBILITY: &[DetailSection] = &[
    DetailSection::icon(
        "Highlights",
        IconName::Star,
        &[
            "Platform Agnostic (All): Works with existing projects from any platform (Lovable, Replit, Figma, Base44)",
            "3 Integration Scenarios (3): Supports ready-made codebase, additional features, and empty projects",
            "Non-Destructive (Safe): Preserves existing functionality while enhancing with new features",
        ],
    ),
];

/// Why teams adopt the framework, grouped by theme
pub static BENEFITS: &[ContentRecord] = &[
    ContentRecord::new(
        "speed",
        "Development Speed",
        "Months of development compressed into minutes",
        VisualTag::new(IconName::Zap, Tone::Yellow),
    )
    .with_sections(BENEFIT_SPEED),
    ContentRecord::new(
        "quality",
        "Quality & Reliability",
        "Production-ready output guarded at every stage",
        VisualTag::new(IconName::Shield, Tone::Green),
    )
    .with_sections(BENEFIT_QUALITY),
    ContentRecord::new(
        "domain",
        "Domain Intelligence",
        "Industry patterns applied automatically",
        VisualTag::new(IconName::Brain, Tone::Purple),
    )
    .with_sections(BENEFIT_DOMAIN),
    ContentRecord::new(
        "compatibility",
        "Universal Compatibility",
        "Works with any project, new or existing",
        VisualTag::new(IconName::Globe, Tone::Blue),
    )
    .with_sections(BENEFIT_COMPATIBILITY),
];

const OUTCOME_COMPLETE_APPLICATION: &[DetailSection] = &[
    DetailSection::icon(
        "Delivers",
        IconName::CheckCircle,
        &[
            "Complete backend implementation",
            "Full frontend application",
            "Database with proper schema",
            "API endpoints with documentation",
            "Authentication and authorization",
            "Testing suite (unit, integration, E2E)",
            "CI/CD pipeline configuration",
            "Production deployment setup",
        ],
    ),
];

const OUTCOME_DOMAIN_INTELLIGENCE: &[DetailSection] = &[
    DetailSection::icon(
        "Delivers",
        IconName::CheckCircle,
        &[
            "Domain-specific architecture patterns",
            "Industry compliance requirements",
            "Best practice implementations",
            "Security standards application",
            "Performance optimizations",
            "Scalability considerations",
            "Maintenance guidelines",
            "Documentation standards",
        ],
    ),
];

const OUTCOME_TECHNOLOGY_STACK: &[DetailSection] = &[
    DetailSection::icon(
        "Delivers",
        IconName::CheckCircle,
        &[
            ".NET Core 8.0 + C# 12 + ASP.NET Core Web API",
            "Vue.js 3 + Vuex 4 + Vue Router 4 + Axios 1.6",
            "MongoDB with official .NET driver",
            "JWT + Azure AD authentication",
            "Docker + Kubernetes + Azure App Services",
            "Clean Architecture + Domain-Driven Design",
            "Microservices architecture",
            "Event-driven architecture",
        ],
    ),
];

const OUTCOME_QUALITY_ASSURANCE: &[DetailSection] = &[
    DetailSection::icon(
        "Delivers",
        IconName::CheckCircle,
        &[
            "Built-in validation at every stage",
            "Quality gates and checkpoints",
            "Automated testing pipeline",
            "Code quality standards",
            "Security vulnerability scanning",
            "Performance testing",
            "Load testing configuration",
            "Monitoring and logging setup",
        ],
    ),
];

const OUTCOME_DOCUMENTATION: &[DetailSection] = &[
    DetailSection::icon(
        "Delivers",
        IconName::CheckCircle,
        &[
            "Functional Specification Document (FSD)",
            "Technical Specification Document (TSD)",
            "Refined Technical Specification Document (RTSD)",
            "API documentation with examples",
            "Database schema documentation",
            "Deployment guides",
            "User manuals",
            "Developer guides",
        ],
    ),
];

const OUTCOME_VISUAL_VERIFICATION: &[DetailSection] = &[
    DetailSection::icon(
        "Delivers",
        IconName::CheckCircle,
        &[
            "6 comprehensive Mermaid diagrams",
            "User Journey diagrams",
            "System Architecture diagrams",
            "Business Process diagrams",
            "Data Model diagrams",
            "API Flow diagrams",
            "Gantt Chart diagrams",
            "Both MMD and image formats for universal understanding",
        ],
    ),
];

/// What a complete framework run produces
pub static OUTCOMES: &[ContentRecord] = &[
    ContentRecord::new(
        "complete-application",
        "Complete Application",
        "Fully functional, production-ready application",
        VisualTag::new(IconName::Rocket, Tone::Blue),
    )
    .with_sections(OUTCOME_COMPLETE_APPLICATION),
    ContentRecord::new(
        "domain-intelligence",
        "Domain Intelligence",
        "Industry-specific patterns and best practices",
        VisualTag::new(IconName::Brain, Tone::Purple),
    )
    .with_sections(OUTCOME_DOMAIN_INTELLIGENCE),
    ContentRecord::new(
        "technology-stack",
        "Technology Stack",
        "Modern, enterprise-grade technology stack",
        VisualTag::new(IconName::Code, Tone::Green),
    )
    .with_sections(OUTCOME_TECHNOLOGY_STACK),
    ContentRecord::new(
        "quality-assurance",
        "Quality Assurance",
        "Comprehensive validation and quality gates",
        VisualTag::new(IconName::Shield, Tone::Orange),
    )
    .with_sections(OUTCOME_QUALITY_ASSURANCE),
    ContentRecord::new(
        "documentation",
        "Documentation",
        "Complete specifications and documentation",
        VisualTag::new(IconName::BookOpen, Tone::Cyan),
    )
    .with_sections(OUTCOME_DOCUMENTATION),
    ContentRecord::new(
        "visual-verification",
        "Visual Verification",
        "Mermaid diagrams in multiple formats",
        VisualTag::new(IconName::FileText, Tone::Pink),
    )
    .with_sections(OUTCOME_VISUAL_VERIFICATION),
];
