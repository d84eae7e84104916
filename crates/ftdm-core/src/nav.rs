//! Docs pages and the sidebar groups they belong to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::IconName;
use crate::error::Error;
use crate::registry::SectionKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Introduction,
    QuickStart,
    StageOverview,
    Scenarios,
    Safeguards,
    Benefits,
}

/// Sidebar heading with its pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub title: &'static str,
    pub pages: &'static [Page],
}

pub static NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        title: "Getting Started",
        pages: &[Page::Introduction, Page::QuickStart],
    },
    NavGroup {
        title: "Framework Stages",
        pages: &[Page::StageOverview],
    },
    NavGroup {
        title: "Advanced Concepts",
        pages: &[Page::Scenarios, Page::Safeguards, Page::Benefits],
    },
];

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 6] = [
        Page::Introduction,
        Page::QuickStart,
        Page::StageOverview,
        Page::Scenarios,
        Page::Safeguards,
        Page::Benefits,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Introduction => "Introduction",
            Page::QuickStart => "Quick Start",
            Page::StageOverview => "Stage Overview",
            Page::Scenarios => "Framework Scenarios",
            Page::Safeguards => "Anti-Hallucination Safeguards",
            Page::Benefits => "Benefits & Outcomes",
        }
    }

    /// URL path segment, also accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Introduction => "introduction",
            Page::QuickStart => "quick-start",
            Page::StageOverview => "stage-overview",
            Page::Scenarios => "scenarios",
            Page::Safeguards => "safeguards",
            Page::Benefits => "benefits",
        }
    }

    pub fn icon(&self) -> IconName {
        match self {
            Page::Introduction => IconName::BookOpen,
            Page::QuickStart => IconName::Rocket,
            Page::StageOverview => IconName::Layers,
            Page::Scenarios => IconName::GitBranch,
            Page::Safeguards => IconName::Shield,
            Page::Benefits => IconName::Star,
        }
    }

    /// One-paragraph lead shown under the page title
    pub fn lead(&self) -> &'static str {
        match self {
            Page::Introduction => {
                "FTDM turns raw requirements into production-ready applications through \
                 a structured, automated process with domain intelligence and \
                 anti-hallucination safeguards."
            }
            Page::QuickStart => {
                "Follow these steps to transform your raw requirements into a \
                 production-ready application with minimal effort."
            }
            Page::StageOverview => {
                "Seven stages take a project from raw requirements to a running \
                 application. Stage 6 is split into thirteen implementation sub-stages."
            }
            Page::Scenarios => {
                "The framework adapts to where your project starts: an existing \
                 codebase, an existing project that needs new features, or nothing at all."
            }
            Page::Safeguards => {
                "Safeguards run before, during and after every stage to keep generated \
                 output accurate and consistent."
            }
            Page::Benefits => {
                "What you gain from the framework and what a complete run delivers."
            }
        }
    }

    /// Independent accordions shown on this page, top to bottom
    pub fn sections(&self) -> &'static [SectionKey] {
        match self {
            Page::Introduction => &[SectionKey::Features],
            Page::QuickStart => &[SectionKey::QuickStart],
            Page::StageOverview => &[SectionKey::Stages, SectionKey::ImplementationStages],
            Page::Scenarios => &[SectionKey::Scenarios],
            Page::Safeguards => &[SectionKey::Safeguards, SectionKey::ValidationPhases],
            Page::Benefits => &[SectionKey::Benefits, SectionKey::Outcomes],
        }
    }

    /// Whether the page shows the headline stats strip
    pub fn shows_stats(&self) -> bool {
        matches!(self, Page::Introduction)
    }

    fn position(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Next page in sidebar order, wrapping around
    pub fn next(&self) -> Page {
        Page::ALL[(self.position() + 1) % Page::ALL.len()]
    }

    /// Previous page in sidebar order, wrapping around
    pub fn previous(&self) -> Page {
        let len = Page::ALL.len();
        Page::ALL[(self.position() + len - 1) % len]
    }

    /// Page for a 1-based sidebar number
    pub fn from_number(n: usize) -> Option<Page> {
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| Error::unknown_page(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Page::Introduction.next(), Page::QuickStart);
        assert_eq!(Page::Benefits.next(), Page::Introduction);
        assert_eq!(Page::Introduction.previous(), Page::Benefits);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Page::from_number(1), Some(Page::Introduction));
        assert_eq!(Page::from_number(3), Some(Page::StageOverview));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(7), None);
    }

    #[test]
    fn test_nav_groups_cover_every_page_once() {
        let listed: Vec<Page> = NAV_GROUPS
            .iter()
            .flat_map(|g| g.pages.iter().copied())
            .collect();
        assert_eq!(listed, Page::ALL);
    }

    #[test]
    fn test_stage_overview_has_two_accordions() {
        assert_eq!(
            Page::StageOverview.sections(),
            &[SectionKey::Stages, SectionKey::ImplementationStages]
        );
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(
            "stage_overview".parse::<Page>().unwrap(),
            Page::StageOverview
        );
        assert!(matches!(
            "changelog".parse::<Page>(),
            Err(Error::UnknownPage { .. })
        ));
    }
}
