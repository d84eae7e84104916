//! Framework stages and the implementation sub-stages of stage 6

use crate::content::{ContentRecord, DetailSection, IconName, Tone, VisualTag};

const STAGE_1: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Raw Requirements",
            "3 Clarifying Questions",
            "Technology Stack Confirmation",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Analyze raw requirements for completeness",
            "Generate 6 comprehensive Mermaid diagrams",
            "Create both MMD and image formats",
            "Apply domain intelligence patterns",
            "Validate outputs against quality gates",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Refined Requirements",
            "6 Mermaid Diagrams",
            "MMD Files",
            "Image Files",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Stage Boundary Enforcement",
            "Output Validation",
            "Error Prevention",
            "Consistency Validation",
        ],
    ),
];

const STAGE_2: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Refined Requirements",
            "Mermaid Diagrams",
            "Domain Intelligence",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Process refined requirements and diagrams",
            "Apply domain-specific business logic",
            "Generate comprehensive user stories",
            "Include compliance requirements",
            "Validate against industry standards",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Complete FSD",
            "Business Logic",
            "Compliance Requirements",
            "User Stories",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Technical Accuracy",
            "Business Logic Validation",
            "Compliance Check",
            "Cross-Reference Validation",
        ],
    ),
];

const STAGE_3: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "FSD",
            "Mermaid Diagrams",
            "Domain Intelligence",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Design enterprise-grade system architecture",
            "Create comprehensive API specifications",
            "Design database schema and relationships",
            "Generate UXD folder structure",
            "Apply technology stack specifications",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Complete TSD",
            "System Architecture",
            "API Specs",
            "Database Design",
            "UXD Folder Structure",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Architecture Validation",
            "API Specification Check",
            "Database Design Review",
            "Technology Stack Validation",
        ],
    ),
];

const STAGE_4: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "FSD",
            "TSD",
            "UXD Folder Structure",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Analyze existing UXD folder structure",
            "Create comprehensive design system",
            "Generate wireframes and mockups",
            "Build component library",
            "Create data visualization patterns",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Design System",
            "Wireframes",
            "Component Library",
            "Data Visualizations",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Design Consistency",
            "Component Validation",
            "Accessibility Check",
            "Visual Hierarchy Review",
        ],
    ),
];

const STAGE_5: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "FSD",
            "TSD",
            "UXD Assets",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Integrate business logic with technical specs",
            "Refine implementation specifications",
            "Integrate UI/UX assets",
            "Create comprehensive RTSD",
            "Validate implementation readiness",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Complete RTSD",
            "Business Logic",
            "Implementation Specs",
            "Asset Integration",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Business Logic Integration",
            "Implementation Validation",
            "Asset Integration Check",
            "Readiness Assessment",
        ],
    ),
];

const STAGE_6: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "All Previous Outputs",
            "RTSD",
            "Implementation Plan",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "FSD Analysis & Validation",
            "Implementation Planning",
            "Project Setup & Architecture",
            "Database Model Design",
            "ORM Mapper & MongoDB Classes",
            "Business Service Interfaces",
            "Interface Validation & Coverage",
            "Business Service Implementations",
            "Unit Testing Cases",
            "REST API Development",
            "Frontend Screen Development",
            "Frontend Unit Test Cases",
            "CI/CD & Deployment (Azure)",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Complete Application",
            "Unit Tests",
            "API Endpoints",
            "Frontend Screens",
            "CI/CD Pipeline",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Code Quality Gates",
            "Test Coverage Validation",
            "API Endpoint Testing",
            "Deployment Readiness",
        ],
    ),
];

const STAGE_7: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "All Implementation Outputs",
            "API Specifications",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create temporary backend implementation",
            "Set up local testing environment",
            "Configure API endpoints",
            "Enable local development workflow",
            "Validate testing environment",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Temporary Backend",
            "API Endpoints",
            "Local Testing Environment",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Backend Validation",
            "API Testing",
            "Environment Setup",
            "Local Testing Verification",
        ],
    ),
];

/// The seven top-level framework stages, in execution order
pub static STAGES: &[ContentRecord] = &[
    ContentRecord::new(
        "1",
        "Mermaid Generation",
        "Generate visual diagrams and refine requirements",
        VisualTag::new(IconName::FileText, Tone::Blue),
    )
    .with_details(
        "Transforms raw requirements into crystal clear specifications with comprehensive visual diagrams for universal understanding.",
    )
    .with_duration("5-10 minutes")
    .with_sections(STAGE_1),
    ContentRecord::new(
        "2",
        "FSD Creation",
        "Create comprehensive functional specifications",
        VisualTag::new(IconName::Code, Tone::Green),
    )
    .with_details(
        "Generates comprehensive functional specification document with domain intelligence and industry standards.",
    )
    .with_duration("10-15 minutes")
    .with_sections(STAGE_2),
    ContentRecord::new(
        "3",
        "TSD Creation",
        "Generate technical specifications and architecture",
        VisualTag::new(IconName::Settings, Tone::Purple),
    )
    .with_details(
        "Creates comprehensive technical specification with enterprise architecture and UXD folder structure.",
    )
    .with_duration("15-20 minutes")
    .with_sections(STAGE_3),
    ContentRecord::new(
        "4",
        "UI/UX Designs Analysis",
        "Create design system and visual assets",
        VisualTag::new(IconName::Palette, Tone::Pink),
    )
    .with_details(
        "Analyzes existing UXD folder and creates comprehensive UI/UX designs with design-first approach.",
    )
    .with_duration("20-25 minutes")
    .with_sections(STAGE_4),
    ContentRecord::new(
        "5",
        "RTSD Creation",
        "Refine technical specs with business logic",
        VisualTag::new(IconName::Database, Tone::Orange),
    )
    .with_details(
        "Refines technical specifications with business logic intelligence and implementation details.",
    )
    .with_duration("15-20 minutes")
    .with_sections(STAGE_5),
    ContentRecord::new(
        "6",
        "Implementation Stages",
        "Complete application development (13 phases)",
        VisualTag::new(IconName::Play, Tone::Indigo),
    )
    .with_details(
        "Implements complete application through 13 sub-stages with comprehensive testing and deployment.",
    )
    .with_duration("2-3 hours")
    .with_sections(STAGE_6),
    ContentRecord::new(
        "7",
        "Temporary Backend",
        "Backend implementation for local testing",
        VisualTag::new(IconName::Cloud, Tone::Cyan),
    )
    .with_details(
        "Creates temporary backend implementation for local testing and development.",
    )
    .with_duration("30-45 minutes")
    .with_sections(STAGE_7),
];

const SUB_STAGE_6_1: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Complete FSD",
            "Domain Intelligence",
            "Business Requirements",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Deep analysis of functional requirements",
            "Validation against domain standards",
            "Business logic verification",
            "Compliance requirement check",
            "Cross-reference validation",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Validated FSD",
            "Analysis Report",
            "Business Logic Validation",
            "Compliance Checklist",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Technical Accuracy",
            "Business Logic Validation",
            "Compliance Check",
            "Cross-Reference Validation",
        ],
    ),
];

const SUB_STAGE_6_2: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Validated FSD",
            "TSD",
            "Technology Stack",
            "Domain Intelligence",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create implementation roadmap",
            "Define development phases",
            "Resource allocation planning",
            "Timeline estimation",
            "Risk assessment and mitigation",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Implementation Plan",
            "Development Roadmap",
            "Resource Allocation",
            "Timeline Schedule",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Planning Accuracy",
            "Resource Validation",
            "Timeline Verification",
            "Risk Assessment",
        ],
    ),
];

const SUB_STAGE_6_3: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Implementation Plan",
            "TSD",
            "Technology Stack",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Initialize project structure",
            "Set up development environment",
            "Configure build tools and dependencies",
            "Implement clean architecture patterns",
            "Set up version control and CI/CD pipeline",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Project Structure",
            "Development Environment",
            "Build Configuration",
            "Architecture Setup",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Architecture Validation",
            "Environment Setup",
            "Configuration Check",
            "Structure Verification",
        ],
    ),
];

const SUB_STAGE_6_4: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "FSD",
            "TSD",
            "Domain Intelligence",
            "Business Logic",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Design database schema",
            "Define entity relationships",
            "Create data models",
            "Implement indexing strategy",
            "Validate data integrity constraints",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Database Schema",
            "Entity Models",
            "Relationship Diagrams",
            "Data Validation Rules",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Schema Validation",
            "Relationship Check",
            "Data Integrity",
            "Performance Optimization",
        ],
    ),
];

const SUB_STAGE_6_5: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Database Schema",
            "Entity Models",
            "Technology Stack",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create ORM mappings",
            "Implement MongoDB integration",
            "Generate data access classes",
            "Configure connection management",
            "Implement query optimization",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "ORM Mappings",
            "MongoDB Classes",
            "Data Access Layer",
            "Connection Management",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Mapping Validation",
            "Connection Testing",
            "Query Optimization",
            "Performance Check",
        ],
    ),
];

const SUB_STAGE_6_6: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "FSD",
            "Business Logic",
            "Domain Intelligence",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Define service interfaces",
            "Create business contracts",
            "Implement service abstractions",
            "Define method signatures",
            "Validate interface contracts",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Service Interfaces",
            "Business Contracts",
            "Method Signatures",
            "Interface Documentation",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Interface Validation",
            "Contract Verification",
            "Method Signature Check",
            "Documentation Accuracy",
        ],
    ),
];

const SUB_STAGE_6_7: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Service Interfaces",
            "FSD",
            "Business Requirements",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Validate interface completeness",
            "Check method coverage",
            "Verify business logic coverage",
            "Test interface contracts",
            "Generate coverage reports",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Validation Report",
            "Coverage Analysis",
            "Interface Tests",
            "Completeness Check",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Coverage Validation",
            "Interface Testing",
            "Completeness Check",
            "Quality Assurance",
        ],
    ),
];

const SUB_STAGE_6_8: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Service Interfaces",
            "Business Logic",
            "Domain Intelligence",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Implement business services",
            "Apply domain-specific patterns",
            "Integrate with data layer",
            "Implement business rules",
            "Add error handling and validation",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Business Services",
            "Service Implementations",
            "Business Logic",
            "Error Handling",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Implementation Validation",
            "Business Logic Check",
            "Error Handling",
            "Pattern Compliance",
        ],
    ),
];

const SUB_STAGE_6_9: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Service Implementations",
            "Business Logic",
            "Test Requirements",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create unit test cases",
            "Implement test scenarios",
            "Add edge case testing",
            "Generate test data",
            "Validate test coverage",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Unit Tests",
            "Test Cases",
            "Test Data",
            "Coverage Reports",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Test Validation",
            "Coverage Verification",
            "Edge Case Testing",
            "Quality Assurance",
        ],
    ),
];

const SUB_STAGE_6_10: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Service Implementations",
            "API Specifications",
            "Business Logic",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create REST API controllers",
            "Implement endpoint logic",
            "Add request/response handling",
            "Implement authentication and authorization",
            "Add API documentation",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "REST API",
            "API Controllers",
            "Endpoint Documentation",
            "Authentication",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "API Validation",
            "Endpoint Testing",
            "Security Check",
            "Documentation Accuracy",
        ],
    ),
];

const SUB_STAGE_6_11: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "UI/UX Designs",
            "API Endpoints",
            "Component Library",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create frontend components",
            "Implement user interfaces",
            "Integrate with API endpoints",
            "Add state management",
            "Implement responsive design",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Frontend Components",
            "User Interfaces",
            "State Management",
            "Responsive Design",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "UI Validation",
            "Component Testing",
            "API Integration",
            "Responsive Check",
        ],
    ),
];

const SUB_STAGE_6_12: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Frontend Components",
            "UI/UX Specifications",
            "Test Requirements",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Create component tests",
            "Implement integration tests",
            "Add user interaction tests",
            "Test responsive behavior",
            "Validate accessibility",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "Frontend Tests",
            "Component Tests",
            "Integration Tests",
            "Accessibility Tests",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Test Validation",
            "Component Testing",
            "Accessibility Check",
            "Integration Verification",
        ],
    ),
];

const SUB_STAGE_6_13: &[DetailSection] = &[
    DetailSection::icon(
        "Inputs",
        IconName::ArrowRight,
        &[
            "Complete Application",
            "Azure Configuration",
            "Deployment Requirements",
        ],
    ),
    DetailSection::numbered(
        "Process",
        &[
            "Configure CI/CD pipeline",
            "Set up Azure App Services",
            "Configure deployment scripts",
            "Implement monitoring and logging",
            "Set up production environment",
        ],
    ),
    DetailSection::icon(
        "Outputs",
        IconName::CheckCircle,
        &[
            "CI/CD Pipeline",
            "Azure Deployment",
            "Production Environment",
            "Monitoring Setup",
        ],
    ),
    DetailSection::icon(
        "Safeguards",
        IconName::Shield,
        &[
            "Deployment Validation",
            "Pipeline Testing",
            "Environment Check",
            "Monitoring Verification",
        ],
    ),
];

/// The thirteen sub-stages that make up stage 6
pub static IMPLEMENTATION_STAGES: &[ContentRecord] = &[
    ContentRecord::new(
        "6.1",
        "FSD Analysis & Validation",
        "Analyze and validate functional specification document",
        VisualTag::new(IconName::CheckCircle, Tone::Amber),
    )
    .with_duration("10-15 minutes")
    .with_sections(SUB_STAGE_6_1),
    ContentRecord::new(
        "6.2",
        "Implementation Planning",
        "Create comprehensive implementation roadmap",
        VisualTag::new(IconName::Target, Tone::Rose),
    )
    .with_duration("15-20 minutes")
    .with_sections(SUB_STAGE_6_2),
    ContentRecord::new(
        "6.3",
        "Project Setup & Architecture",
        "Initialize project structure and architecture",
        VisualTag::new(IconName::Package, Tone::Fuchsia),
    )
    .with_duration("20-25 minutes")
    .with_sections(SUB_STAGE_6_3),
    ContentRecord::new(
        "6.4",
        "Database Model Design",
        "Design comprehensive database schema",
        VisualTag::new(IconName::Database, Tone::Lime),
    )
    .with_duration("25-30 minutes")
    .with_sections(SUB_STAGE_6_4),
    ContentRecord::new(
        "6.5",
        "ORM Mapper & MongoDB Classes",
        "Create ORM mappings and MongoDB integration",
        VisualTag::new(IconName::Network, Tone::Sky),
    )
    .with_duration("20-25 minutes")
    .with_sections(SUB_STAGE_6_5),
    ContentRecord::new(
        "6.6",
        "Business Service Interfaces",
        "Define business service contracts and interfaces",
        VisualTag::new(IconName::Cpu, Tone::Violet),
    )
    .with_duration("25-30 minutes")
    .with_sections(SUB_STAGE_6_6),
    ContentRecord::new(
        "6.7",
        "Interface Validation & Coverage",
        "Validate interfaces and ensure comprehensive coverage",
        VisualTag::new(IconName::ShieldCheck, Tone::Emerald),
    )
    .with_duration("15-20 minutes")
    .with_sections(SUB_STAGE_6_7),
    ContentRecord::new(
        "6.8",
        "Business Service Implementations",
        "Implement all business service logic",
        VisualTag::new(IconName::Code, Tone::Teal),
    )
    .with_duration("45-60 minutes")
    .with_sections(SUB_STAGE_6_8),
    ContentRecord::new(
        "6.9",
        "Unit Testing Cases",
        "Create comprehensive unit test suite",
        VisualTag::new(IconName::CheckCircle, Tone::Orange),
    )
    .with_duration("30-40 minutes")
    .with_sections(SUB_STAGE_6_9),
    ContentRecord::new(
        "6.10",
        "REST API Development",
        "Develop comprehensive REST API endpoints",
        VisualTag::new(IconName::Server, Tone::Red),
    )
    .with_duration("40-50 minutes")
    .with_sections(SUB_STAGE_6_10),
    ContentRecord::new(
        "6.11",
        "Frontend Screen Development",
        "Develop complete frontend user interface",
        VisualTag::new(IconName::Monitor, Tone::Yellow),
    )
    .with_duration("60-75 minutes")
    .with_sections(SUB_STAGE_6_11),
    ContentRecord::new(
        "6.12",
        "Frontend Unit Test Cases",
        "Create comprehensive frontend test suite",
        VisualTag::new(IconName::Smartphone, Tone::Indigo),
    )
    .with_duration("25-35 minutes")
    .with_sections(SUB_STAGE_6_12),
    ContentRecord::new(
        "6.13",
        "CI/CD & Deployment (Azure)",
        "Set up continuous integration and Azure deployment",
        VisualTag::new(IconName::GitBranch, Tone::Cyan),
    )
    .with_duration("30-40 minutes")
    .with_sections(SUB_STAGE_6_13),
];
