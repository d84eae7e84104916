//! Static content registry
//!
//! Every docs section is a fixed, ordered slice of [`ContentRecord`]s compiled
//! into the binary. [`records`] is the only read path; it never allocates and
//! returns the same slice on every call.

mod benefits;
mod intro;
mod safeguards;
mod scenarios;
mod stages;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::content::ContentRecord;
use crate::error::Error;

pub use intro::{Stat, STATS};

/// Identifies one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    Features,
    QuickStart,
    Stages,
    ImplementationStages,
    Safeguards,
    ValidationPhases,
    Scenarios,
    Benefits,
    Outcomes,
}

impl SectionKey {
    pub const ALL: [SectionKey; 9] = [
        SectionKey::Features,
        SectionKey::QuickStart,
        SectionKey::Stages,
        SectionKey::ImplementationStages,
        SectionKey::Safeguards,
        SectionKey::ValidationPhases,
        SectionKey::Scenarios,
        SectionKey::Benefits,
        SectionKey::Outcomes,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SectionKey::Features => "features",
            SectionKey::QuickStart => "quick-start",
            SectionKey::Stages => "stages",
            SectionKey::ImplementationStages => "implementation-stages",
            SectionKey::Safeguards => "safeguards",
            SectionKey::ValidationPhases => "validation-phases",
            SectionKey::Scenarios => "scenarios",
            SectionKey::Benefits => "benefits",
            SectionKey::Outcomes => "outcomes",
        }
    }

    /// Heading shown above the section's accordion
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Features => "Why FTDM",
            SectionKey::QuickStart => "Get Started in 5 Minutes",
            SectionKey::Stages => "7-Stage Automation Process",
            SectionKey::ImplementationStages => "Implementation Sub-Stages",
            SectionKey::Safeguards => "Anti-Hallucination Safeguards",
            SectionKey::ValidationPhases => "Validation Process",
            SectionKey::Scenarios => "Integration Scenarios",
            SectionKey::Benefits => "Key Benefits",
            SectionKey::Outcomes => "Expected Outcomes",
        }
    }

    /// Word placed before a record id in its header ("Stage 6.1")
    pub fn id_prefix(&self) -> Option<&'static str> {
        match self {
            SectionKey::Stages | SectionKey::ImplementationStages => Some("Stage"),
            SectionKey::QuickStart => Some("Step"),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SectionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SectionKey::ALL
            .into_iter()
            .find(|key| key.slug() == wanted)
            .ok_or_else(|| Error::unknown_section(s))
    }
}

/// Ordered records for one section
pub fn records(key: SectionKey) -> &'static [ContentRecord] {
    match key {
        SectionKey::Features => intro::FEATURES,
        SectionKey::QuickStart => intro::QUICK_START,
        SectionKey::Stages => stages::STAGES,
        SectionKey::ImplementationStages => stages::IMPLEMENTATION_STAGES,
        SectionKey::Safeguards => safeguards::SAFEGUARDS,
        SectionKey::ValidationPhases => safeguards::VALIDATION_PHASES,
        SectionKey::Scenarios => scenarios::SCENARIOS,
        SectionKey::Benefits => benefits::BENEFITS,
        SectionKey::Outcomes => benefits::OUTCOMES,
    }
}

/// Look up a record by its string id
pub fn find(key: SectionKey, id: &str) -> Option<&'static ContentRecord> {
    records(key).iter().find(|r| r.id.as_str() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_records_are_identical_across_reads() {
        for key in SectionKey::ALL {
            let first = records(key);
            let second = records(key);
            assert_eq!(first, second);
            assert!(std::ptr::eq(first, second), "{key} should be static");
        }
    }

    #[test]
    fn test_ids_unique_within_each_section() {
        for key in SectionKey::ALL {
            let mut seen = HashSet::new();
            for record in records(key) {
                assert!(seen.insert(record.id), "duplicate id {} in {key}", record.id);
            }
        }
    }

    #[test]
    fn test_every_section_has_records() {
        for key in SectionKey::ALL {
            assert!(!records(key).is_empty(), "{key} is empty");
        }
    }

    #[test]
    fn test_stage_counts() {
        assert_eq!(records(SectionKey::Stages).len(), 7);
        assert_eq!(records(SectionKey::ImplementationStages).len(), 13);
        assert_eq!(records(SectionKey::Safeguards).len(), 6);
        assert_eq!(records(SectionKey::Scenarios).len(), 3);
        assert_eq!(records(SectionKey::QuickStart).len(), 5);
    }

    #[test]
    fn test_stats_match_registry() {
        let stat = |label: &str| STATS.iter().find(|s| s.label == label).unwrap().value;
        assert_eq!(
            stat("Automated Stages"),
            records(SectionKey::Stages).len().to_string()
        );
        assert_eq!(
            stat("Implementation Sub-Stages"),
            records(SectionKey::ImplementationStages).len().to_string()
        );
    }

    #[test]
    fn test_stages_are_in_execution_order() {
        let ids: Vec<_> = records(SectionKey::Stages)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);

        let last = records(SectionKey::ImplementationStages).last().unwrap();
        assert_eq!(last.id.as_str(), "6.13");
    }

    #[test]
    fn test_stage_six_process_lists_every_sub_stage() {
        let stage6 = find(SectionKey::Stages, "6").unwrap();
        let process = stage6
            .detail_sections
            .iter()
            .find(|s| s.label == "Process")
            .unwrap();
        let sub_titles: Vec<_> = records(SectionKey::ImplementationStages)
            .iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(process.items, sub_titles.as_slice());
    }

    #[test]
    fn test_section_key_from_str() {
        assert_eq!("stages".parse::<SectionKey>().unwrap(), SectionKey::Stages);
        assert_eq!(
            "Implementation_Stages".parse::<SectionKey>().unwrap(),
            SectionKey::ImplementationStages
        );
        assert!(matches!(
            "faq".parse::<SectionKey>(),
            Err(Error::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_find() {
        assert_eq!(
            find(SectionKey::ImplementationStages, "6.10").map(|r| r.title),
            Some("REST API Development")
        );
        assert!(find(SectionKey::Stages, "8").is_none());
    }

    #[test]
    fn test_id_prefix() {
        assert_eq!(SectionKey::Stages.id_prefix(), Some("Stage"));
        assert_eq!(SectionKey::Benefits.id_prefix(), None);
    }
}
