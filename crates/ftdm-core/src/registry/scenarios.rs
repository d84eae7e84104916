//! Integration scenarios: how the framework meets an existing or empty project

use crate::content::{ContentRecord, DetailSection, IconName, Tone, VisualTag};

const SCENARIO_READY_MADE: &[DetailSection] = &[
    DetailSection::plain(
        "Project Structure",
        &[
            "[project_name]/",
            "├── EFTDM_FRAMEWORK/          # Framework files",
            "└── [existing_project]/       # Existing project (Lovable, Replit, Figma, Base44)",
            "    ├── src/                  # Existing source code",
            "    ├── components/           # Existing components",
            "    ├── services/             # Existing services",
            "    ├── [existing_files]/     # All existing files",
            "    └── [enhanced_files]/     # Files added/modified by EFTDM",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Stage 1: Analyzes the same raw requirements in context of existing codebase",
            "Stage 2: Creates FSD that enhances existing functionality",
            "Stage 3: Generates TSD that improves existing architecture",
            "Stage 4: Creates UI/UX designs that enhance existing design system",
            "Stage 5: Generates RTSD that improves existing implementation",
            "Stage 6.1-6.13: Enhances existing codebase with new features and improvements",
            "Stage 7: Enhances existing backend with additional functionality",
        ],
    ),
    DetailSection::icon(
        "Codebase Analysis",
        IconName::Eye,
        &[
            "Deep Code Analysis: Analyzes all existing files, components, and code structure",
            "Pattern Recognition: Identifies existing coding patterns, architecture, and conventions",
            "Technology Stack Detection: Detects existing tech stack and frameworks used",
            "Design System Analysis: Analyzes existing UI/UX patterns and design system",
            "Architecture Understanding: Understands existing architecture and data flow",
            "Integration Points: Identifies where new features can be integrated seamlessly",
        ],
    ),
    DetailSection::icon(
        "Benefits",
        IconName::CheckCircle,
        &[
            "Enhanced Implementation: Improves existing codebase with domain intelligence",
            "No Code Loss: Preserves all existing functionality",
            "Better Architecture: Applies EFTDM best practices to existing code",
            "Domain Intelligence: Enhances existing implementation with domain-specific patterns",
        ],
    ),
    DetailSection::plain(
        "Example",
        &[
            "You have a Lovable-created payroll system, paste that codebase, provide the same payroll requirement to EFTDM. EFTDM enhances the existing Lovable codebase by adding missing features, improving architecture, and applying domain intelligence.",
        ],
    ),
];

const SCENARIO_ADDITIONAL_FEATURES: &[DetailSection] = &[
    DetailSection::plain(
        "Project Structure",
        &[
            "[project_name]/",
            "├── EFTDM_FRAMEWORK/          # Framework files",
            "└── [existing_project]/       # Existing project (Lovable, Replit, etc.)",
            "    ├── src/                  # Existing source code",
            "    ├── components/           # Existing components",
            "    ├── services/             # Existing services",
            "    ├── [existing_files]/     # All existing files",
            "    └── [enhanced_files]/     # Files added/modified by EFTDM",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Stage 1: Analyzes new requirements in context of existing project",
            "Stage 2: Creates FSD that integrates with existing functionality",
            "Stage 3: Generates TSD that extends existing architecture",
            "Stage 4: Creates UI/UX designs that match existing design system",
            "Stage 5: Generates RTSD that integrates with existing codebase",
            "Stage 6.1-6.13: Implements new features that integrate with existing project",
            "Stage 7: Extends existing backend with new functionality",
        ],
    ),
    DetailSection::icon(
        "Codebase Analysis",
        IconName::Eye,
        &[
            "Deep Code Analysis: Analyzes all existing files, components, and code structure",
            "Pattern Recognition: Identifies existing coding patterns, architecture, and conventions",
            "Technology Stack Detection: Detects existing tech stack and frameworks used",
            "Design System Analysis: Analyzes existing UI/UX patterns and design system",
            "Architecture Understanding: Understands existing architecture and data flow",
            "Integration Points: Identifies where new features can be integrated seamlessly",
        ],
    ),
    DetailSection::icon(
        "Integration Strategy",
        IconName::ArrowRight,
        &[
            "Code Analysis: Analyzes existing codebase structure and patterns",
            "Design System Integration: Matches existing UI/UX patterns",
            "Architecture Extension: Extends existing architecture without breaking changes",
            "API Integration: Integrates new APIs with existing backend",
            "Database Extension: Extends existing database schema",
        ],
    ),
    DetailSection::icon(
        "Benefits",
        IconName::CheckCircle,
        &[
            "Seamless Integration: New features integrate naturally with existing code",
            "No Breaking Changes: Preserves existing functionality",
            "Consistent Design: Maintains existing design system and patterns",
            "Scalable Architecture: Extends architecture without refactoring",
        ],
    ),
    DetailSection::plain(
        "Example",
        &[
            "You have a Lovable-created CRM system, and want to add a reporting module. EFTDM analyzes the existing CRM, creates a reporting module that integrates seamlessly.",
        ],
    ),
];

const SCENARIO_EMPTY_PROJECT: &[DetailSection] = &[
    DetailSection::plain(
        "Project Structure",
        &[
            "[project_name]/",
            "├── EFTDM_FRAMEWORK/          # Framework files",
            "└── [new_project_files]/      # New project files (generated by EFTDM)",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Stage 1: Analyzes raw requirements and creates comprehensive Mermaid diagrams",
            "Stage 2: Creates complete FSD for the new application",
            "Stage 3: Generates complete TSD with full architecture",
            "Stage 4: Creates complete UI/UX design system",
            "Stage 5: Generates complete RTSD with business logic",
            "Stage 6.1-6.13: Implements complete application from scratch",
            "Stage 7: Creates complete backend system",
        ],
    ),
    DetailSection::icon(
        "Benefits",
        IconName::CheckCircle,
        &[
            "Complete Control: Full control over architecture and design decisions",
            "Best Practices: Implements industry best practices from the start",
            "Domain Expertise: Applies domain-specific intelligence throughout",
            "Production Ready: Creates production-ready applications from day one",
        ],
    ),
    DetailSection::plain(
        "Example",
        &[
            "You want to create a new healthcare management system from scratch. EFTDM creates a complete, production-ready application.",
        ],
    ),
];

/// The three supported starting points
pub static SCENARIOS: &[ContentRecord] = &[
    ContentRecord::new(
        "ready-made",
        "Ready Made Codebase",
        "New Requirement - Ready Made Codebase",
        VisualTag::new(IconName::Building, Tone::Blue),
    )
    .with_details(
        "Enhance existing project (Lovable, Replit, Figma, Base44) with the same requirement that was used to create it.",
    )
    .with_sections(SCENARIO_READY_MADE),
    ContentRecord::new(
        "additional-features",
        "Additional Features",
        "Existing Project - Additional Feature to Existing Codebase",
        VisualTag::new(IconName::Layers, Tone::Green),
    )
    .with_details(
        "Add new features or modules to the existing codebase.",
    )
    .with_sections(SCENARIO_ADDITIONAL_FEATURES),
    ContentRecord::new(
        "empty-project",
        "Empty Project",
        "New Application from Scratch",
        VisualTag::new(IconName::Rocket, Tone::Purple),
    )
    .with_details(
        "Create a new application from scratch with complete control over architecture and design.",
    )
    .with_sections(SCENARIO_EMPTY_PROJECT),
];
