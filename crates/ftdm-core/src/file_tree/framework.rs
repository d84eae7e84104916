//! Layout of the downloadable framework archive

use super::{file, folder, FileNode};

const EFTDM_FRAMEWORK_FRAMEWORKS: &[FileNode] = &[
    folder("all_stage_prompts", &[]),
    file("anti_hallucination_safeguards.md"),
    file("comprehensive_error_prevention_system.md"),
    file("design_asset_support_guide.md"),
    file("domain_intelligence_framework.md"),
    file("domain_intelligence_integration.md"),
    file("domain_intelligence_prompts.md"),
    file("domain_intelligence_validation.md"),
    file("enhanced_quality_gates.md"),
    file("figma_mcp_integration_framework.md"),
    file("interactive_requirement_example.md"),
    file("interactive_requirement_refinement.md"),
    file("kickstart_prompt.md"),
    file("mermaid_integration_framework.md"),
    file("phase_progression_controller.md"),
    file("real_time_testing_framework.md"),
    file("rtsd_creation_methodology.md"),
    file("rtsd_creation_prompt.md"),
    file("senior_developer_kickstart_prompt.md"),
    file("uxd_folder_structure_guide.md"),
    file("uxd_image_analysis_framework.md"),
];

const EFTDM_FRAMEWORK_SCRIPTS: &[FileNode] = &[
    file("stage1-asset-migration.sh"),
    file("stage2-asset-migration.sh"),
    file("stage3-asset-migration.sh"),
    file("stage4-asset-migration.sh"),
    file("stage5-asset-migration.sh"),
    file("stage6-asset-migration.sh"),
    file("stage7-asset-migration.sh"),
    file("framework-setup.sh"),
    file("project-initialization.sh"),
    file("validation-scripts.sh"),
    file("deployment-scripts.sh"),
    file("testing-scripts.sh"),
    file("cleanup-scripts.sh"),
    file("backup-scripts.sh"),
    file("monitoring-scripts.sh"),
    file("security-scripts.sh"),
    file("performance-scripts.sh"),
    file("documentation-scripts.sh"),
    file("integration-scripts.sh"),
    file("maintenance-scripts.sh"),
    file("utility-scripts.sh"),
    file("automation-scripts.sh"),
    file("quality-scripts.sh"),
    file("compliance-scripts.sh"),
    file("reporting-scripts.sh"),
    file("notification-scripts.sh"),
    file("sync-scripts.sh"),
    file("migration-scripts.py"),
    file("validation-scripts.py"),
    file("analysis-scripts.py"),
];

const EFTDM_FRAMEWORK_STAGE1_MERMAID_GENERATION_MERMAID_TEMPLATES: &[FileNode] = &[
    file("templates.md"),
];

const EFTDM_FRAMEWORK_STAGE1_MERMAID_GENERATION_EXAMPLE_OUTPUTS: &[FileNode] = &[
    file("examples.md"),
];

const EFTDM_FRAMEWORK_STAGE1_MERMAID_GENERATION: &[FileNode] = &[
    file("mermaid_generation_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
    file("troubleshooting.md"),
    file("validation_checklist.md"),
    folder("mermaid_templates", EFTDM_FRAMEWORK_STAGE1_MERMAID_GENERATION_MERMAID_TEMPLATES),
    folder("example_outputs", EFTDM_FRAMEWORK_STAGE1_MERMAID_GENERATION_EXAMPLE_OUTPUTS),
];

const EFTDM_FRAMEWORK_STAGE2_FSD_CREATION_EXAMPLE_OUTPUTS: &[FileNode] = &[file("sample_fsd.md")];

const EFTDM_FRAMEWORK_STAGE2_FSD_CREATION: &[FileNode] = &[
    file("fsd_creation_prompt.md"),
    file("fsd_template.md"),
    file("README.md"),
    file("user_guide.md"),
    folder("example_outputs", EFTDM_FRAMEWORK_STAGE2_FSD_CREATION_EXAMPLE_OUTPUTS),
];

const EFTDM_FRAMEWORK_STAGE3_TSD_CREATION: &[FileNode] = &[
    file("tsd_creation_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_DESIGN_SYSTEM: &[FileNode] = &[
    file("color_palette.json"),
    file("typography.json"),
    file("spacing.json"),
    file("components.json"),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_SCREENS: &[FileNode] = &[file("README.md")];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_ASSETS_ICONS: &[FileNode] = &[
    file("README.md"),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_ASSETS_IMAGES: &[FileNode] = &[
    file("README.md"),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_ASSETS: &[FileNode] = &[
    folder("icons", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_ASSETS_ICONS),
    folder("images", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_ASSETS_IMAGES),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD: &[FileNode] = &[
    file("README.md"),
    file("figma_links.md"),
    folder("design_system", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_DESIGN_SYSTEM),
    folder("screens", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_SCREENS),
    folder("assets", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD_ASSETS),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_TEMPLATES: &[FileNode] = &[
    file("design_system_template.json"),
    file("figma_links_template.md"),
    file("navigation_list_template.md"),
];

const EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS: &[FileNode] = &[
    file("ui_ux_designs_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
    folder("UXD", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_UXD),
    folder("templates", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS_TEMPLATES),
    folder("example_outputs", &[]),
];

const EFTDM_FRAMEWORK_STAGE5_RTSD_CREATION: &[FileNode] = &[
    file("rtsd_creation_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_1_FSD_ANALYSIS_VALIDATION: &[FileNode] = &[
    file("fsd_analysis_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_2_IMPLEMENTATION_PLANNING: &[FileNode] = &[
    file("implementation_planning_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_3_PROJECT_SETUP_ARCHITECTURE: &[FileNode] = &[
    file("project_setup_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_4_DATABASE_MODEL_DESIGN: &[FileNode] = &[
    file("database_model_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_5_ORM_MAPPER_MONGODB_CLASSES: &[FileNode] = &[
    file("orm_mapper_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_6_BUSINESS_SERVICE_INTERFACES: &[FileNode] = &[
    file("service_interfaces_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_7_INTERFACE_VALIDATION_COVERAGE: &[FileNode] = &[
    file("validation_coverage_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_8_BUSINESS_SERVICE_IMPLEMENTATIONS: &[FileNode] = &[
    file("service_implementations_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_9_UNIT_TESTING_CASES: &[FileNode] = &[
    file("unit_testing_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_10_REST_API_DEVELOPMENT: &[FileNode] = &[
    file("rest_api_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_11_FRONTEND_SCREEN_DEVELOPMENT: &[FileNode] = &[
    file("frontend_screens_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_12_FRONTEND_UNIT_TEST_CASES: &[FileNode] = &[
    file("frontend_unit_tests_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE6_13_CICD_DEPLOYMENT_AZURE_APP_SERVICE: &[FileNode] = &[
    file("cicd_deployment_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_STAGE7_TEMPORARY_BACKEND_LOCAL_TEST: &[FileNode] = &[
    file("6_STAGE_FRAMEWORK_OVERVIEW.md"),
    file("temporary_backend_prompt.md"),
    file("README.md"),
    file("user_guide.md"),
];

const EFTDM_FRAMEWORK_TEMPLATES: &[FileNode] = &[file("project_template.md")];

const EFTDM_FRAMEWORK: &[FileNode] = &[
    folder("frameworks", EFTDM_FRAMEWORK_FRAMEWORKS),
    folder("scripts", EFTDM_FRAMEWORK_SCRIPTS),
    folder("Stage1_Mermaid_Generation", EFTDM_FRAMEWORK_STAGE1_MERMAID_GENERATION),
    folder("Stage2_FSD_Creation", EFTDM_FRAMEWORK_STAGE2_FSD_CREATION),
    folder("Stage3_TSD_Creation", EFTDM_FRAMEWORK_STAGE3_TSD_CREATION),
    folder("Stage4_UI_UX_Designs_Analysis", EFTDM_FRAMEWORK_STAGE4_UI_UX_DESIGNS_ANALYSIS),
    folder("Stage5_RTSD_Creation", EFTDM_FRAMEWORK_STAGE5_RTSD_CREATION),
    folder("Stage6_1_FSD_Analysis_Validation", EFTDM_FRAMEWORK_STAGE6_1_FSD_ANALYSIS_VALIDATION),
    folder("Stage6_2_Implementation_Planning", EFTDM_FRAMEWORK_STAGE6_2_IMPLEMENTATION_PLANNING),
    folder("Stage6_3_Project_Setup_Architecture", EFTDM_FRAMEWORK_STAGE6_3_PROJECT_SETUP_ARCHITECTURE),
    folder("Stage6_4_Database_Model_Design", EFTDM_FRAMEWORK_STAGE6_4_DATABASE_MODEL_DESIGN),
    folder("Stage6_5_ORM_Mapper_MongoDB_Classes", EFTDM_FRAMEWORK_STAGE6_5_ORM_MAPPER_MONGODB_CLASSES),
    folder("Stage6_6_Business_Service_Interfaces", EFTDM_FRAMEWORK_STAGE6_6_BUSINESS_SERVICE_INTERFACES),
    folder("Stage6_7_Interface_Validation_Coverage", EFTDM_FRAMEWORK_STAGE6_7_INTERFACE_VALIDATION_COVERAGE),
    folder("Stage6_8_Business_Service_Implementations", EFTDM_FRAMEWORK_STAGE6_8_BUSINESS_SERVICE_IMPLEMENTATIONS),
    folder("Stage6_9_Unit_Testing_Cases", EFTDM_FRAMEWORK_STAGE6_9_UNIT_TESTING_CASES),
    folder("Stage6_10_REST_API_Development", EFTDM_FRAMEWORK_STAGE6_10_REST_API_DEVELOPMENT),
    folder("Stage6_11_Frontend_Screen_Development", EFTDM_FRAMEWORK_STAGE6_11_FRONTEND_SCREEN_DEVELOPMENT),
    folder("Stage6_12_Frontend_Unit_Test_Cases", EFTDM_FRAMEWORK_STAGE6_12_FRONTEND_UNIT_TEST_CASES),
    folder("Stage6_13_CICD_Deployment_Azure_App_Service", EFTDM_FRAMEWORK_STAGE6_13_CICD_DEPLOYMENT_AZURE_APP_SERVICE),
    folder("Stage7_Temporary_Backend_Local_Test", EFTDM_FRAMEWORK_STAGE7_TEMPORARY_BACKEND_LOCAL_TEST),
    folder("templates", EFTDM_FRAMEWORK_TEMPLATES),
    file("README.md"),
    file("USAGE_GUIDE.md"),
];

/// Top-level entries of the archive
pub static FRAMEWORK_TREE: &[FileNode] = &[folder("EFTDM_FRAMEWORK", EFTDM_FRAMEWORK)];
