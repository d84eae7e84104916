//! Color palettes for the light and dark themes.

use ftdm_core::Tone;
use ratatui::style::Color;

/// Every color a widget may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,
    pub selected_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,

    // --- Effects ---
    pub shadow: Color,

    /// Use the darker shade of each tone
    light_tones: bool,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    selected_bg: Color::Rgb(30, 41, 59),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    contrast_fg: Color::Black,
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),
    shadow: Color::Rgb(5, 6, 8),
    light_tones: false,
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(248, 250, 252),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(241, 245, 249),
    selected_bg: Color::Rgb(219, 234, 254),
    border_dim: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    contrast_fg: Color::White,
    text_primary: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),
    status_green: Color::Rgb(5, 150, 105),
    status_red: Color::Rgb(225, 29, 72),
    status_yellow: Color::Rgb(202, 138, 4),
    shadow: Color::Rgb(148, 163, 184),
    light_tones: true,
};

impl Palette {
    /// Foreground color for a record's visual tag
    pub fn tone(&self, tone: Tone) -> Color {
        // (400 shade, 600 shade)
        let (on_dark, on_light) = match tone {
            Tone::Amber => ((251, 191, 36), (217, 119, 6)),
            Tone::Blue => ((96, 165, 250), (37, 99, 235)),
            Tone::Cyan => ((34, 211, 238), (8, 145, 178)),
            Tone::Emerald => ((52, 211, 153), (5, 150, 105)),
            Tone::Fuchsia => ((232, 121, 249), (192, 38, 211)),
            Tone::Green => ((74, 222, 128), (22, 163, 74)),
            Tone::Indigo => ((129, 140, 248), (79, 70, 229)),
            Tone::Lime => ((163, 230, 53), (101, 163, 13)),
            Tone::Orange => ((251, 146, 60), (234, 88, 12)),
            Tone::Pink => ((244, 114, 182), (219, 39, 119)),
            Tone::Purple => ((192, 132, 252), (147, 51, 234)),
            Tone::Red => ((248, 113, 113), (220, 38, 38)),
            Tone::Rose => ((251, 113, 133), (225, 29, 72)),
            Tone::Sky => ((56, 189, 248), (2, 132, 199)),
            Tone::Teal => ((45, 212, 191), (13, 148, 136)),
            Tone::Violet => ((167, 139, 250), (124, 58, 237)),
            Tone::Yellow => ((250, 204, 21), (202, 138, 4)),
        };
        let (r, g, b) = if self.light_tones { on_light } else { on_dark };
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones_differ_between_modes() {
        assert_ne!(DARK.tone(Tone::Blue), LIGHT.tone(Tone::Blue));
        assert_eq!(DARK.tone(Tone::Blue), Color::Rgb(96, 165, 250));
    }

    #[test]
    fn test_text_contrasts_with_background() {
        assert_ne!(DARK.text_primary, DARK.deepest_bg);
        assert_ne!(LIGHT.text_primary, LIGHT.deepest_bg);
    }
}
