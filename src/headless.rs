//! Headless mode - the current page as JSON
//!
//! Prints the exact rows the terminal view would paint for the chosen page
//! and expansion, so scripts and tests can read the docs without parsing
//! ANSI output.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use ftdm_app::AppState;
use ftdm_core::prelude::*;
use ftdm_core::SectionRow;

/// One accordion on the page
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub key: &'static str,
    pub title: &'static str,
    pub rows: Vec<SectionRow>,
}

/// Everything visible on a page
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub page: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
    pub theme: &'static str,
    pub sections: Vec<SectionReport>,
    pub generated_at: DateTime<Utc>,
}

impl PageReport {
    pub fn from_state(state: &AppState) -> Self {
        let page = state.page();
        let sections = state
            .view
            .sections(state.section_options())
            .into_iter()
            .map(|(key, rows)| SectionReport {
                key: key.slug(),
                title: key.title(),
                rows,
            })
            .collect();

        Self {
            page: page.slug(),
            title: page.title(),
            lead: page.lead(),
            theme: state.theme().as_str(),
            sections,
            generated_at: Utc::now(),
        }
    }
}

/// Write the report for `state` as pretty JSON followed by a newline
pub fn write_report(state: &AppState, out: &mut impl Write) -> Result<()> {
    let report = PageReport::from_state(state);
    debug!(
        "Headless report for {} ({} sections)",
        report.page,
        report.sections.len()
    );
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftdm_core::Page;

    fn report_json(state: &AppState) -> serde_json::Value {
        let mut out = Vec::new();
        write_report(state, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_report_lists_every_section() {
        let mut state = AppState::new();
        state.start_at(Page::StageOverview, None);
        let json = report_json(&state);

        assert_eq!(json["page"], "stage-overview");
        assert_eq!(json["sections"][0]["key"], "stages");
        assert_eq!(json["sections"][1]["key"], "implementation-stages");
        assert_eq!(json["sections"][0]["rows"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_report_includes_expanded_panel() {
        let mut state = AppState::new();
        state.start_at(Page::StageOverview, Some("1"));
        let json = report_json(&state);

        let rows = json["sections"][0]["rows"].as_array().unwrap();
        assert_eq!(rows[0]["row"], "header");
        assert_eq!(rows[0]["expanded"], true);
        assert_eq!(rows[1]["row"], "details");
        assert!(rows.len() > 7);
    }
}
