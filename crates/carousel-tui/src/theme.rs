use ratatui::style::Color;
use tracing::warn;

/// Runtime colors of the carousel screen
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub grey1: Color,
    pub grey2: Color,
    pub accent: Color,
    pub warning: Color,
    /// Card border colors, cycled per page
    pub cards: [Color; 5],
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            cards: [
                Color::Rgb(0xea, 0x69, 0x62),
                Color::Rgb(0xd8, 0xa6, 0x57),
                Color::Rgb(0xa9, 0xb6, 0x65),
                Color::Rgb(0x7d, 0xae, 0xa3),
                Color::Rgb(0xd3, 0x86, 0x9b),
            ],
        }
    }
}

impl Theme {
    pub fn card(&self, actual: usize) -> Color {
        self.cards[actual % self.cards.len()]
    }
}

/// Parse a configured color: a name ratatui knows or `#rrggbb`
pub fn parse_color(value: &str) -> Color {
    match value.parse::<Color>() {
        Ok(color) => color,
        Err(_) => {
            warn!("Unknown color '{}', using gray", value);
            Color::Gray
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#ff0000"), Color::Rgb(0xff, 0, 0));
        assert_eq!(parse_color("not-a-color"), Color::Gray);
    }
}
