/// Random color generation and RGB/hex conversion.
use rand::{Rng, RngExt};

/// Inclusive bounds of a displayable color channel.
pub const CHANNEL_MIN: i64 = 0;
pub const CHANNEL_MAX: i64 = 255;

/// Range used for flag colors, biased toward legible mid-brightness.
pub const FLAG_MIN: i64 = 55;
pub const FLAG_MAX: i64 = 200;

const HEX_MAX: u32 = 0xFF_FFFF;

/// An RGB triple. Channels are `i64` so out-of-range values can be carried
/// into [`rgb_to_hex`], which clamps them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Rgb {
    /// Hex string for this triple, clamping each channel to [0, 255].
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// CSS-style `rgb(r, g, b)` text, as rendered in the UI.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Uniform integer in the inclusive range [ceil(min), floor(max)].
///
/// Precondition: `ceil(min) <= floor(max)`. An empty range after rounding is
/// a caller error and panics.
pub fn random_int_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    let min_ceil = min.ceil() as i64;
    let max_floor = max.floor() as i64;
    rng.random_range(min_ceil..=max_floor)
}

/// Random RGB triple with each channel in [0, 255].
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    random_rgb_in_range(rng, CHANNEL_MIN as f64, CHANNEL_MAX as f64)
}

/// Random RGB triple with each channel drawn independently from
/// [ceil(min), floor(max)].
pub fn random_rgb_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Rgb {
    Rgb {
        r: random_int_in_range(rng, min, max),
        g: random_int_in_range(rng, min, max),
        b: random_int_in_range(rng, min, max),
    }
}

/// Random hex color drawn uniformly from the full 24-bit space,
/// zero-padded to six lowercase digits.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value = rng.random_range(0..=HEX_MAX);
    format!("#{value:06x}")
}

/// Convert an RGB triple to a `#rrggbb` string. Channels outside [0, 255]
/// are clamped to the nearest boundary, so the output is always exactly
/// seven lowercase characters.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    let r = r.clamp(CHANNEL_MIN, CHANNEL_MAX);
    let g = g.clamp(CHANNEL_MIN, CHANNEL_MAX);
    let b = b.clamp(CHANNEL_MIN, CHANNEL_MAX);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Hex color for tagging a session or cursor: a random triple from the
/// mid-brightness flag range, converted to hex.
pub fn flag_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_rgb_in_range(rng, FLAG_MIN as f64, FLAG_MAX as f64).to_hex()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5747)
    }

    #[test]
    fn int_in_range_stays_within_bounds() {
        let mut rng = rng();
        for _ in 0..1000 {
            let value = random_int_in_range(&mut rng, 50.0, 205.0);
            assert!((50..=205).contains(&value));
        }
    }

    #[test]
    fn int_in_range_rounds_fractional_bounds_inward() {
        let mut rng = rng();
        for _ in 0..1000 {
            let value = random_int_in_range(&mut rng, 0.2, 3.9);
            assert!((1..=3).contains(&value));
        }
    }

    #[test]
    fn int_in_range_handles_single_value_range() {
        let mut rng = rng();
        assert_eq!(random_int_in_range(&mut rng, 7.0, 7.0), 7);
    }

    #[test]
    fn default_rgb_channels_are_displayable() {
        let mut rng = rng();
        for _ in 0..1000 {
            let rgb = random_rgb(&mut rng);
            for channel in [rgb.r, rgb.g, rgb.b] {
                assert!((CHANNEL_MIN..=CHANNEL_MAX).contains(&channel));
            }
        }
    }

    #[test]
    fn ranged_rgb_channels_respect_the_range() {
        let mut rng = rng();
        for _ in 0..1000 {
            let rgb = random_rgb_in_range(&mut rng, 50.0, 205.0);
            for channel in [rgb.r, rgb.g, rgb.b] {
                assert!((50..=205).contains(&channel));
            }
        }
    }

    #[test]
    fn rgb_to_hex_clamps_out_of_range_channels() {
        assert_eq!(rgb_to_hex(-1, 256, 300), "#00ffff");
    }

    #[test]
    fn rgb_to_hex_pads_single_digits() {
        assert_eq!(rgb_to_hex(5, 5, 5), "#050505");
    }

    #[test]
    fn rgb_to_hex_covers_the_boundaries() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
    }

    #[test]
    fn rgb_to_hex_is_deterministic() {
        assert_eq!(rgb_to_hex(17, 128, 254), rgb_to_hex(17, 128, 254));
    }

    #[test]
    fn random_hex_color_is_always_well_formed() {
        let mut rng = rng();
        for _ in 0..1000 {
            let hex = random_hex_color(&mut rng);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(
                hex[1..]
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
            );
        }
    }

    #[test]
    fn flag_color_decodes_into_the_flag_range() {
        let mut rng = rng();
        for _ in 0..1000 {
            let hex = flag_color(&mut rng);
            assert_eq!(hex.len(), 7);
            for i in 0..3 {
                let channel =
                    i64::from_str_radix(&hex[1 + i * 2..3 + i * 2], 16).expect("hex channel");
                assert!((FLAG_MIN..=FLAG_MAX).contains(&channel));
            }
        }
    }

    #[test]
    fn seeded_generators_reproduce_the_same_colors() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(random_rgb(&mut a), random_rgb(&mut b));
        assert_eq!(random_hex_color(&mut a), random_hex_color(&mut b));
        assert_eq!(flag_color(&mut a), flag_color(&mut b));
    }
}
