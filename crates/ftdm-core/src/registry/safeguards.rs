//! Anti-hallucination safeguards and the validation phases they run in

use crate::content::{ContentRecord, DetailSection, IconName, Tone, VisualTag};

const SAFEGUARD_BOUNDARY: &[DetailSection] = &[
    DetailSection::numbered(
        "Implementation",
        &[
            "Pre-Generation: Validates stage numbers and inputs before processing",
            "During Generation: Monitors for stage boundary violations",
            "Post-Generation: Validates all outputs are within valid stage range",
            "Stage Transition: Ensures all validation criteria are met before proceeding",
        ],
    ),
    DetailSection::icon(
        "Valid",
        IconName::CheckCircle,
        &[
            "VALID: Stage 1: Mermaid Generation",
            "VALID: Stage 2: FSD Creation",
            "VALID: Stage 3: TSD Creation",
            "VALID: Stage 4: UI/UX Designs Analysis",
            "VALID: Stage 5: RTSD Creation",
            "VALID: Stage 6.1-6.13: Implementation Stages (13 sub-stages)",
            "VALID: Stage 7: Temporary Backend",
        ],
    ),
    DetailSection::icon(
        "Invalid",
        IconName::XCircle,
        &[
            "INVALID: Stage 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, etc.",
        ],
    ),
];

const SAFEGUARD_OUTPUT: &[DetailSection] = &[
    DetailSection::numbered(
        "Implementation",
        &[
            "Technical Accuracy: Validates all technical specifications are correct",
            "Completeness Check: Ensures all required outputs are generated",
            "Consistency Validation: Verifies outputs are consistent with inputs",
            "Quality Assurance: Applies domain-specific quality standards",
        ],
    ),
    DetailSection::icon(
        "Valid",
        IconName::CheckCircle,
        &[
            "Mermaid diagrams are syntactically correct",
            "FSD contains all required functional specifications",
            "TSD includes complete technical architecture",
            "Database schemas are properly normalized",
            "API endpoints follow RESTful conventions",
            "Code follows established patterns and conventions",
        ],
    ),
];

const SAFEGUARD_CONSISTENCY: &[DetailSection] = &[
    DetailSection::numbered(
        "Implementation",
        &[
            "Cross-Stage Validation: Ensures outputs from Stage N align with inputs for Stage N+1",
            "Data Flow Validation: Validates data flows correctly between stages",
            "Reference Validation: Ensures all references between stages are valid",
            "Context Preservation: Maintains context and requirements throughout all stages",
        ],
    ),
    DetailSection::icon(
        "Valid",
        IconName::CheckCircle,
        &[
            "Stage 1 outputs (Mermaid diagrams) are used correctly in Stage 2",
            "FSD from Stage 2 is properly referenced in Stage 3 TSD",
            "UXD folder structure from Stage 3 is analyzed in Stage 4",
            "All stage outputs maintain consistency with original requirements",
            "Technology stack remains consistent across all stages",
        ],
    ),
];

const SAFEGUARD_ERRORS: &[DetailSection] = &[
    DetailSection::numbered(
        "Implementation",
        &[
            "Input Validation: Validates all inputs before processing",
            "Error Detection: Detects potential errors during generation",
            "Error Recovery: Implements recovery mechanisms for detected errors",
            "Quality Gates: Applies quality gates at each stage transition",
        ],
    ),
    DetailSection::icon(
        "Valid",
        IconName::CheckCircle,
        &[
            "Validates raw requirements are complete and clear",
            "Detects missing or incomplete specifications",
            "Prevents generation of invalid code or configurations",
            "Ensures all generated files are syntactically correct",
            "Validates database schemas are properly designed",
        ],
    ),
];

const SAFEGUARD_SCRIPTS: &[DetailSection] = &[
    DetailSection::numbered(
        "Implementation",
        &[
            "Automated Testing: Runs automated tests on all generated outputs",
            "Validation Pipeline: Implements validation pipeline for each stage",
            "Quality Metrics: Tracks quality metrics throughout the process",
            "Continuous Validation: Provides continuous validation during generation",
        ],
    ),
    DetailSection::icon(
        "Valid",
        IconName::CheckCircle,
        &[
            "Automated syntax validation for all generated code",
            "Automated testing of generated API endpoints",
            "Automated validation of database schemas",
            "Automated testing of frontend components",
            "Automated validation of deployment configurations",
        ],
    ),
];

const SAFEGUARD_DOCS: &[DetailSection] = &[
    DetailSection::numbered(
        "Implementation",
        &[
            "Documentation Validation: Validates all documentation is accurate",
            "Consistency Checks: Ensures documentation is consistent across files",
            "Version Control: Maintains version control for all documentation",
            "Update Validation: Validates documentation updates are accurate",
        ],
    ),
    DetailSection::icon(
        "Valid",
        IconName::CheckCircle,
        &[
            "All stage descriptions are accurate and consistent",
            "Input/output specifications match actual implementation",
            "User journey documentation reflects actual process",
            "Technical specifications are accurate and complete",
            "All examples and use cases are valid and tested",
        ],
    ),
];

/// The six safeguards applied at every stage
pub static SAFEGUARDS: &[ContentRecord] = &[
    ContentRecord::new(
        "boundary",
        "Stage Boundary Enforcement",
        "Explicit warnings about valid stages (1-7 only)",
        VisualTag::new(IconName::Lock, Tone::Red),
    )
    .with_details(
        "Prevents the framework from creating or referencing stages beyond the defined 7 stages. Ensures strict adherence to the framework structure.",
    )
    .with_sections(SAFEGUARD_BOUNDARY),
    ContentRecord::new(
        "output",
        "Output Validation",
        "Technical accuracy validation for all outputs",
        VisualTag::new(IconName::CheckCircle, Tone::Green),
    )
    .with_details(
        "Validates all generated outputs for technical accuracy, completeness, and consistency with requirements.",
    )
    .with_sections(SAFEGUARD_OUTPUT),
    ContentRecord::new(
        "consistency",
        "Consistency Validation",
        "Cross-stage consistency checks",
        VisualTag::new(IconName::Eye, Tone::Blue),
    )
    .with_details(
        "Ensures consistency across all stages and validates that outputs from one stage align with inputs for the next stage.",
    )
    .with_sections(SAFEGUARD_CONSISTENCY),
    ContentRecord::new(
        "errors",
        "Error Prevention",
        "Comprehensive error detection and prevention",
        VisualTag::new(IconName::AlertTriangle, Tone::Orange),
    )
    .with_details(
        "Implements comprehensive error detection and prevention mechanisms to avoid common AI mistakes and hallucinations.",
    )
    .with_sections(SAFEGUARD_ERRORS),
    ContentRecord::new(
        "scripts",
        "Validation Scripts",
        "Automated validation pipeline",
        VisualTag::new(IconName::Zap, Tone::Purple),
    )
    .with_details(
        "Automated validation scripts that run at each stage to ensure quality and consistency.",
    )
    .with_sections(SAFEGUARD_SCRIPTS),
    ContentRecord::new(
        "docs",
        "Documentation Accuracy",
        "Consistent documentation across all files",
        VisualTag::new(IconName::BookOpen, Tone::Cyan),
    )
    .with_details(
        "Ensures all documentation is accurate, consistent, and up-to-date across all framework files.",
    )
    .with_sections(SAFEGUARD_DOCS),
];

const PHASE_PRE: &[DetailSection] = &[
    DetailSection::icon(
        "Checks",
        IconName::CheckCircle,
        &[
            "Stage boundary validation",
            "Input completeness check",
            "Requirements validation",
            "Technology stack validation",
        ],
    ),
];

const PHASE_DURING: &[DetailSection] = &[
    DetailSection::icon(
        "Checks",
        IconName::CheckCircle,
        &[
            "Real-time validation",
            "Consistency monitoring",
            "Error detection",
            "Quality metrics tracking",
        ],
    ),
];

const PHASE_POST: &[DetailSection] = &[
    DetailSection::icon(
        "Checks",
        IconName::CheckCircle,
        &[
            "Output completeness validation",
            "Technical accuracy verification",
            "Cross-stage consistency check",
            "Quality gate validation",
        ],
    ),
];

const PHASE_STAGE_TRANSITION: &[DetailSection] = &[
    DetailSection::icon(
        "Checks",
        IconName::CheckCircle,
        &[
            "Transition validation",
            "Context preservation",
            "Data flow validation",
            "Next stage preparation",
        ],
    ),
];

/// When the safeguards run, in pipeline order
pub static VALIDATION_PHASES: &[ContentRecord] = &[
    ContentRecord::new(
        "pre",
        "Pre-Generation",
        "Validates stage numbers and inputs",
        VisualTag::new(IconName::Eye, Tone::Red),
    )
    .with_sections(PHASE_PRE),
    ContentRecord::new(
        "during",
        "During Generation",
        "Monitors for technical accuracy and consistency",
        VisualTag::new(IconName::Zap, Tone::Red),
    )
    .with_sections(PHASE_DURING),
    ContentRecord::new(
        "post",
        "Post-Generation",
        "Validates all outputs before proceeding",
        VisualTag::new(IconName::CheckCircle, Tone::Red),
    )
    .with_sections(PHASE_POST),
    ContentRecord::new(
        "stage-transition",
        "Stage Transition",
        "Ensures all validation criteria are met",
        VisualTag::new(IconName::ArrowRight, Tone::Red),
    )
    .with_sections(PHASE_STAGE_TRANSITION),
];
