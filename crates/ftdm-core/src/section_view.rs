//! Pure row model for one accordion section
//!
//! Front-ends paint the rows produced here and nothing else, so the terminal
//! and web renderings agree on ordering, numbering and visibility. Rendering
//! is a function of `(records, accordion, options)` only.

use serde::{Deserialize, Serialize};

use crate::accordion::Accordion;
use crate::content::{ContentRecord, IconName, ItemMarker, RecordId, Tone};
use crate::registry::{self, SectionKey};

/// Presentation switches that used to be separate component copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOptions {
    /// Show each record's duration badge in its header
    pub show_durations: bool,
    /// Show each record's long description at the top of its panel
    pub show_detailed_descriptions: bool,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            show_durations: true,
            show_detailed_descriptions: true,
        }
    }
}

/// Prefix of an item row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ItemPrefix {
    /// 1-based position within its detail section
    Index(usize),
    Icon(IconName),
    None,
}

/// One visual line (or block) of a rendered section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum SectionRow {
    Header {
        id: RecordId,
        label: String,
        summary: &'static str,
        icon: IconName,
        tone: Tone,
        duration: Option<&'static str>,
        expanded: bool,
    },
    Details {
        text: &'static str,
    },
    SubHeading {
        label: &'static str,
    },
    Item {
        prefix: ItemPrefix,
        text: &'static str,
    },
    /// Expanded record with nothing to show
    EmptyPanel,
}

impl SectionRow {
    pub fn is_header(&self) -> bool {
        matches!(self, SectionRow::Header { .. })
    }

    pub fn header_id(&self) -> Option<RecordId> {
        match self {
            SectionRow::Header { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Header text for a record, e.g. "Stage 6.1 - FSD Analysis & Validation"
pub fn header_label(record: &ContentRecord, id_prefix: Option<&str>) -> String {
    match id_prefix {
        Some(prefix) => format!("{prefix} {} - {}", record.id, record.title),
        None => record.title.to_string(),
    }
}

/// Render an arbitrary record list
pub fn render_records(
    records: &'static [ContentRecord],
    id_prefix: Option<&str>,
    accordion: &Accordion,
    options: SectionOptions,
) -> Vec<SectionRow> {
    let mut rows = Vec::new();

    for record in records {
        let expanded = accordion.is_expanded(record.id);
        rows.push(SectionRow::Header {
            id: record.id,
            label: header_label(record, id_prefix),
            summary: record.summary,
            icon: record.visual_tag.icon,
            tone: record.visual_tag.tone,
            duration: record.duration.filter(|_| options.show_durations),
            expanded,
        });

        if expanded {
            push_panel(record, options, &mut rows);
        }
    }

    rows
}

/// Render one registry section
pub fn render_section(
    key: SectionKey,
    accordion: &Accordion,
    options: SectionOptions,
) -> Vec<SectionRow> {
    render_records(registry::records(key), key.id_prefix(), accordion, options)
}

fn push_panel(record: &'static ContentRecord, options: SectionOptions, rows: &mut Vec<SectionRow>) {
    let start = rows.len();

    if let Some(text) = record.details.filter(|_| options.show_detailed_descriptions) {
        rows.push(SectionRow::Details { text });
    }

    for section in record.detail_sections {
        rows.push(SectionRow::SubHeading {
            label: section.label,
        });
        for (i, &text) in section.items.iter().enumerate() {
            let prefix = match section.marker {
                ItemMarker::Numbered => ItemPrefix::Index(i + 1),
                ItemMarker::Icon(icon) => ItemPrefix::Icon(icon),
                ItemMarker::Plain => ItemPrefix::None,
            };
            rows.push(SectionRow::Item { prefix, text });
        }
    }

    if rows.len() == start {
        rows.push(SectionRow::EmptyPanel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DetailSection, VisualTag};

    const TAG: VisualTag = VisualTag::new(IconName::FileText, Tone::Blue);

    const STAGE_ONE_SECTIONS: &[DetailSection] = &[
        DetailSection::numbered("Process", &["Analyze", "Generate"]),
        DetailSection::icon("Outputs", IconName::CheckCircle, &["Diagrams"]),
    ];

    static TWO_STAGES: &[ContentRecord] = &[
        ContentRecord::new("1", "Stage 1", "first", TAG)
            .with_details("Long description")
            .with_duration("5 minutes")
            .with_sections(STAGE_ONE_SECTIONS),
        ContentRecord::new("2", "Stage 2", "second", TAG),
    ];

    fn headers(rows: &[SectionRow]) -> Vec<(RecordId, bool)> {
        rows.iter()
            .filter_map(|r| match r {
                SectionRow::Header { id, expanded, .. } => Some((*id, *expanded)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_collapsed_section_is_headers_only() {
        let rows = render_records(TWO_STAGES, None, &Accordion::new(), SectionOptions::default());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(SectionRow::is_header));
    }

    #[test]
    fn test_click_scenario_panels() {
        let opts = SectionOptions::default();
        let mut acc = Accordion::new();

        acc.toggle(RecordId("1"));
        let rows = render_records(TWO_STAGES, None, &acc, opts);
        assert_eq!(
            headers(&rows),
            [(RecordId("1"), true), (RecordId("2"), false)]
        );
        assert!(rows.len() > 2);

        acc.toggle(RecordId("1"));
        let rows = render_records(TWO_STAGES, None, &acc, opts);
        assert_eq!(rows.len(), 2);

        acc.toggle(RecordId("1"));
        acc.toggle(RecordId("2"));
        let rows = render_records(TWO_STAGES, None, &acc, opts);
        assert_eq!(
            headers(&rows),
            [(RecordId("1"), false), (RecordId("2"), true)]
        );
    }

    #[test]
    fn test_panel_preserves_section_and_item_order() {
        let acc = Accordion::with_expanded(RecordId("1"));
        let rows = render_records(TWO_STAGES, None, &acc, SectionOptions::default());
        assert_eq!(rows.len(), 8);
        assert_eq!(
            &rows[1..7],
            &[
                SectionRow::Details {
                    text: "Long description"
                },
                SectionRow::SubHeading { label: "Process" },
                SectionRow::Item {
                    prefix: ItemPrefix::Index(1),
                    text: "Analyze"
                },
                SectionRow::Item {
                    prefix: ItemPrefix::Index(2),
                    text: "Generate"
                },
                SectionRow::SubHeading { label: "Outputs" },
                SectionRow::Item {
                    prefix: ItemPrefix::Icon(IconName::CheckCircle),
                    text: "Diagrams"
                },
            ]
        );
    }

    #[test]
    fn test_empty_detail_sections_render_empty_panel() {
        let acc = Accordion::with_expanded(RecordId("2"));
        let rows = render_records(TWO_STAGES, None, &acc, SectionOptions::default());
        assert_eq!(rows.last(), Some(&SectionRow::EmptyPanel));
    }

    #[test]
    fn test_options_hide_duration_and_details() {
        let acc = Accordion::with_expanded(RecordId("1"));
        let opts = SectionOptions {
            show_durations: false,
            show_detailed_descriptions: false,
        };
        let rows = render_records(TWO_STAGES, None, &acc, opts);
        match &rows[0] {
            SectionRow::Header { duration, .. } => assert_eq!(*duration, None),
            other => panic!("expected header, got {other:?}"),
        }
        assert!(!rows
            .iter()
            .any(|r| matches!(r, SectionRow::Details { .. })));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let acc = Accordion::with_expanded(RecordId("3"));
        let first = render_section(SectionKey::Stages, &acc, SectionOptions::default());
        let second = render_section(SectionKey::Stages, &acc, SectionOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_stage_headers_carry_prefix() {
        let rows = render_section(
            SectionKey::ImplementationStages,
            &Accordion::new(),
            SectionOptions::default(),
        );
        match &rows[0] {
            SectionRow::Header { label, .. } => {
                assert_eq!(label, "Stage 6.1 - FSD Analysis & Validation")
            }
            other => panic!("expected header, got {other:?}"),
        }
    }
}
