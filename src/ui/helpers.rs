use ratatui::style::Color;

use crate::color::Rgb;

/// Parse a `#rrggbb` string into a terminal color for swatch rendering.
pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Terminal color for an already-displayable triple.
pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r as u8, rgb.g as u8, rgb.b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generated_hex_strings() {
        assert_eq!(hex_to_color("#0180ff"), Some(Color::Rgb(1, 128, 255)));
        assert_eq!(hex_to_color("0180ff"), Some(Color::Rgb(1, 128, 255)));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(hex_to_color("#fff"), None);
        assert_eq!(hex_to_color("#gggggg"), None);
        assert_eq!(hex_to_color(""), None);
    }

    #[test]
    fn converts_displayable_triples() {
        let rgb = Rgb { r: 5, g: 80, b: 255 };
        assert_eq!(rgb_to_color(rgb), Color::Rgb(5, 80, 255));
    }
}
