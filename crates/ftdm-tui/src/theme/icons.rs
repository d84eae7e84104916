//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use ftdm_app::config::IconMode;
use ftdm_core::IconName;

/// Braille spinner frames shown while a download is running
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a content icon
    pub fn icon(&self, name: IconName) -> &'static str {
        let (nerd, unicode) = match name {
            IconName::AlertTriangle => ("\u{f071}", "!"), // nf-fa-warning
            IconName::ArrowRight => ("\u{f061}", "→"),
            IconName::BookOpen => ("\u{f02d}", "≡"), // nf-fa-book
            IconName::Brain => ("\u{f5dc}", "✱"),
            IconName::Building => ("\u{f1ad}", "▦"),
            IconName::CheckCircle => ("\u{f058}", "✓"),
            IconName::Clock => ("\u{f017}", "◷"),
            IconName::Cloud => ("\u{f0c2}", "☁"),
            IconName::Code => ("\u{f121}", "‹›"),
            IconName::Cpu => ("\u{f2db}", "▣"), // nf-fa-microchip
            IconName::Database => ("\u{f1c0}", "◫"),
            IconName::Download => ("\u{f019}", "↓"),
            IconName::Eye => ("\u{f06e}", "◉"),
            IconName::File => ("\u{f15b}", "▫"),
            IconName::FileText => ("\u{f15c}", "▤"),
            IconName::Folder => ("\u{f07b}", "▸"),
            IconName::GitBranch => ("\u{f126}", "⑂"), // nf-fa-code_fork
            IconName::Globe => ("\u{f0ac}", "◍"),
            IconName::Layers => ("\u{f5fd}", "☰"),
            IconName::Lock => ("\u{f023}", "⚿"),
            IconName::Monitor => ("\u{f108}", "▭"), // nf-fa-desktop
            IconName::Network => ("\u{f6ff}", "⋈"),
            IconName::Package => ("\u{f187}", "▣"), // nf-fa-archive
            IconName::Palette => ("\u{f53f}", "◐"),
            IconName::Play => ("\u{f04b}", "▶"),
            IconName::Rocket => ("\u{f135}", "↑"),
            IconName::Server => ("\u{f233}", "▤"),
            IconName::Settings => ("\u{f013}", "⚙"),
            IconName::Shield => ("\u{f132}", "◈"),
            IconName::ShieldCheck => ("\u{f3ed}", "◈"),
            IconName::Smartphone => ("\u{f3cd}", "▯"), // nf-fa-mobile
            IconName::Star => ("\u{f005}", "★"),
            IconName::Target => ("\u{f140}", "◎"), // nf-fa-bullseye
            IconName::XCircle => ("\u{f057}", "✗"),
            IconName::Zap => ("\u{f0e7}", "ϟ"),
        };
        match self.mode {
            IconMode::NerdFonts => nerd,
            IconMode::Unicode => unicode,
        }
    }

    /// Accordion header chevron
    pub fn chevron(&self, expanded: bool) -> &'static str {
        match (self.mode, expanded) {
            (IconMode::NerdFonts, true) => "\u{f078}", // nf-fa-chevron_down
            (IconMode::NerdFonts, false) => "\u{f054}", // nf-fa-chevron_right
            (IconMode::Unicode, true) => "▾",
            (IconMode::Unicode, false) => "▸",
        }
    }

    /// Folder glyph in the archive preview
    pub fn folder(&self, open: bool) -> &'static str {
        match (self.mode, open) {
            (IconMode::NerdFonts, true) => "\u{f07c}", // nf-fa-folder_open
            (IconMode::NerdFonts, false) => "\u{f07b}",
            (IconMode::Unicode, true) => "▾",
            (IconMode::Unicode, false) => "▸",
        }
    }

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15b}",
            IconMode::Unicode => "·",
        }
    }

    pub fn github(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f09b}", // nf-fa-github
            IconMode::Unicode => "⎇",
        }
    }

    pub fn theme(&self, dark: bool) -> &'static str {
        match (self.mode, dark) {
            (IconMode::NerdFonts, true) => "\u{f186}", // nf-fa-moon_o
            (IconMode::NerdFonts, false) => "\u{f185}", // nf-fa-sun_o
            (IconMode::Unicode, true) => "☾",
            (IconMode::Unicode, false) => "☀",
        }
    }

    /// Spinner frame for a tick count
    pub fn spinner(&self, tick: u64) -> &'static str {
        SPINNER[(tick % SPINNER.len() as u64) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_resolve_differently() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_eq!(unicode.icon(IconName::CheckCircle), "✓");
        assert_eq!(nerd.icon(IconName::CheckCircle), "\u{f058}");
    }

    #[test]
    fn test_spinner_cycles() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.spinner(0), icons.spinner(8));
        assert_ne!(icons.spinner(0), icons.spinner(1));
    }
}
