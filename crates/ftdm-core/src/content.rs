//! Content record types shared by every docs section
//!
//! Records are `'static` data compiled into the binary. Nothing here allocates
//! or mutates; front-ends borrow the records straight out of the registry.

use std::fmt;

use serde::Serialize;

/// Stable identifier of a record, unique within its registry
///
/// Stage ids are their display numbers ("1", "6.10"); other sections use
/// short slugs ("boundary", "empty-project").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub &'static str);

impl RecordId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Named icon reference
///
/// Resolution to a glyph or SVG is left to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    AlertTriangle,
    ArrowRight,
    BookOpen,
    Brain,
    Building,
    CheckCircle,
    Clock,
    Cloud,
    Code,
    Cpu,
    Database,
    Download,
    Eye,
    File,
    FileText,
    Folder,
    GitBranch,
    Globe,
    Layers,
    Lock,
    Monitor,
    Network,
    Package,
    Palette,
    Play,
    Rocket,
    Server,
    Settings,
    Shield,
    ShieldCheck,
    Smartphone,
    Star,
    Target,
    XCircle,
    Zap,
}

/// Accent colour family for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Amber,
    Blue,
    Cyan,
    Emerald,
    Fuchsia,
    Green,
    Indigo,
    Lime,
    Orange,
    Pink,
    Purple,
    Red,
    Rose,
    Sky,
    Teal,
    Violet,
    Yellow,
}

/// Icon + colour pairing attached to a record. Carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisualTag {
    pub icon: IconName,
    pub tone: Tone,
}

impl VisualTag {
    pub const fn new(icon: IconName, tone: Tone) -> Self {
        Self { icon, tone }
    }
}

/// Prefix drawn in front of each item of a detail section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "icon", rename_all = "snake_case")]
pub enum ItemMarker {
    /// Running 1-based index
    Numbered,
    /// Status icon, e.g. a check mark
    Icon(IconName),
    /// No prefix, the item is drawn verbatim
    Plain,
}

/// One labelled, ordered list inside a record's detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub label: &'static str,
    pub items: &'static [&'static str],
    pub marker: ItemMarker,
}

impl DetailSection {
    pub const fn numbered(label: &'static str, items: &'static [&'static str]) -> Self {
        Self {
            label,
            items,
            marker: ItemMarker::Numbered,
        }
    }

    pub const fn icon(
        label: &'static str,
        icon: IconName,
        items: &'static [&'static str],
    ) -> Self {
        Self {
            label,
            items,
            marker: ItemMarker::Icon(icon),
        }
    }

    pub const fn plain(label: &'static str, items: &'static [&'static str]) -> Self {
        Self {
            label,
            items,
            marker: ItemMarker::Plain,
        }
    }
}

/// One collapsible content unit: a stage, safeguard, scenario or benefit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    pub id: RecordId,
    pub title: &'static str,
    /// One-line description shown in the collapsed header
    pub summary: &'static str,
    /// Long description, only shown when detailed descriptions are enabled
    pub details: Option<&'static str>,
    /// Estimated duration badge, only shown when durations are enabled
    pub duration: Option<&'static str>,
    pub detail_sections: &'static [DetailSection],
    pub visual_tag: VisualTag,
}

impl ContentRecord {
    /// Minimal record with no optional text and an empty detail panel
    pub const fn new(
        id: &'static str,
        title: &'static str,
        summary: &'static str,
        visual_tag: VisualTag,
    ) -> Self {
        Self {
            id: RecordId(id),
            title,
            summary,
            details: None,
            duration: None,
            detail_sections: &[],
            visual_tag,
        }
    }

    pub const fn with_details(mut self, details: &'static str) -> Self {
        self.details = Some(details);
        self
    }

    pub const fn with_duration(mut self, duration: &'static str) -> Self {
        self.duration = Some(duration);
        self
    }

    pub const fn with_sections(mut self, sections: &'static [DetailSection]) -> Self {
        self.detail_sections = sections;
        self
    }

    /// Total number of list items across all detail sections
    pub fn item_count(&self) -> usize {
        self.detail_sections.iter().map(|s| s.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SECTIONS: &[DetailSection] = &[
        DetailSection::numbered("Process", &["a", "b"]),
        DetailSection::icon("Outputs", IconName::CheckCircle, &["c"]),
    ];

    const SAMPLE: ContentRecord = ContentRecord::new(
        "1",
        "Stage 1",
        "First stage",
        VisualTag::new(IconName::FileText, Tone::Blue),
    )
    .with_duration("5 minutes")
    .with_sections(SAMPLE_SECTIONS);

    #[test]
    fn test_const_builder_fills_optional_fields() {
        assert_eq!(SAMPLE.id, RecordId("1"));
        assert_eq!(SAMPLE.duration, Some("5 minutes"));
        assert_eq!(SAMPLE.details, None);
        assert_eq!(SAMPLE.item_count(), 3);
    }

    #[test]
    fn test_record_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordId("6.10")).unwrap();
        assert_eq!(json, "\"6.10\"");
    }

    #[test]
    fn test_marker_serialization() {
        let json = serde_json::to_value(ItemMarker::Icon(IconName::CheckCircle)).unwrap();
        assert_eq!(json["kind"], "icon");
        assert_eq!(json["icon"], "check-circle");

        let json = serde_json::to_value(ItemMarker::Numbered).unwrap();
        assert_eq!(json["kind"], "numbered");
    }
}
