//! Tests for near-white detection, hex and HSL conversion and color bucketing

#[cfg(test)]
mod tests {
    use logokit::color::classify::{
        ColorFamily, Hsl, Tone, is_near_white, parse_hex, to_hex,
    };

    // Tests the threshold is exclusive: 240 stays, 241 is background
    // Verified by switching the comparison to >=
    #[test]
    fn test_near_white_boundary() {
        assert!(!is_near_white([240, 240, 240]));
        assert!(is_near_white([241, 241, 241]));
        assert!(!is_near_white([241, 241, 240]));
        assert!(!is_near_white([240, 255, 255]));
        assert!(is_near_white([255, 255, 255]));
    }

    // Tests hex formatting is lowercase with zero padding
    // Verified by dropping the width specifier
    #[test]
    fn test_to_hex_format() {
        assert_eq!(to_hex([0, 0, 0]), "#000000");
        assert_eq!(to_hex([255, 255, 255]), "#ffffff");
        assert_eq!(to_hex([0x1f, 0x47, 0x88]), "#1f4788");
        assert_eq!(to_hex([1, 2, 3]), "#010203");
    }

    // Tests every red and green value with a spread of blue values survives a round trip
    // Verified by swapping channel order in parse_hex
    #[test]
    fn test_hex_round_trip() {
        for r in 0..=255u8 {
            for g in (0..=255u8).step_by(5) {
                for b in [0u8, 1, 127, 128, 254, 255] {
                    let rgb = [r, g, b];
                    assert_eq!(parse_hex(&to_hex(rgb)).unwrap(), rgb);
                }
            }
        }
    }

    // Tests parsing accepts missing hash and uppercase digits
    // Verified by requiring the leading hash
    #[test]
    fn test_parse_hex_variants() {
        assert_eq!(parse_hex("#D97757").unwrap(), [0xd9, 0x77, 0x57]);
        assert_eq!(parse_hex("d97757").unwrap(), [0xd9, 0x77, 0x57]);
    }

    // Tests malformed input is rejected
    // Verified by removing the length check
    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("#12345g").is_err());
        assert!(parse_hex("#1234567").is_err());
        assert!(parse_hex("").is_err());
        assert!(parse_hex("#ééé").is_err());
    }

    // Tests HSL for primaries, grays and a mixed color
    // Verified by rounding instead of truncating
    #[test]
    fn test_hsl_conversion() {
        assert_eq!(
            Hsl::from_rgb([255, 0, 0]),
            Hsl {
                hue: 0,
                saturation: 100,
                lightness: 50
            }
        );
        assert_eq!(Hsl::from_rgb([0, 255, 0]).hue, 120);
        assert_eq!(Hsl::from_rgb([0, 0, 255]).hue, 240);
        assert_eq!(
            Hsl::from_rgb([128, 128, 128]),
            Hsl {
                hue: 0,
                saturation: 0,
                lightness: 50
            }
        );
        assert_eq!(Hsl::from_rgb([0, 0, 0]).lightness, 0);
        assert_eq!(Hsl::from_rgb([255, 255, 255]).lightness, 100);

        // #D97757: h = 14.8, s = 63.1, l = 59.6 before truncation
        let rust = Hsl::from_rgb([0xd9, 0x77, 0x57]);
        assert_eq!(rust.hue, 14);
        assert_eq!(rust.saturation, 63);
        assert_eq!(rust.lightness, 59);
    }

    // Tests hue wraps into 0..360 for magenta-side reds
    // Verified by removing the euclidean remainder
    #[test]
    fn test_hsl_hue_wraps() {
        let hsl = Hsl::from_rgb([255, 0, 128]);
        assert_eq!(hsl.hue, 329);
        assert_eq!(hsl.saturation, 100);
    }

    // Tests each family rule in order
    // Verified by reordering the equality checks before dominance checks
    #[test]
    fn test_color_family_rules() {
        assert_eq!(ColorFamily::classify([200, 100, 50]), ColorFamily::OrangeBrown);
        assert_eq!(ColorFamily::classify([200, 50, 100]), ColorFamily::RedPink);
        assert_eq!(ColorFamily::classify([200, 50, 50]), ColorFamily::RedPink);
        assert_eq!(ColorFamily::classify([100, 50, 200]), ColorFamily::PurpleBlue);
        assert_eq!(ColorFamily::classify([50, 100, 200]), ColorFamily::Blue);
        assert_eq!(ColorFamily::classify([50, 200, 100]), ColorFamily::GreenYellow);
        assert_eq!(ColorFamily::classify([200, 200, 100]), ColorFamily::Yellow);
        assert_eq!(ColorFamily::classify([200, 100, 200]), ColorFamily::Magenta);
        assert_eq!(ColorFamily::classify([100, 100, 100]), ColorFamily::GrayBrown);
        assert_eq!(ColorFamily::classify([100, 200, 200]), ColorFamily::GrayBrown);
    }

    // Tests labels and padded display
    // Verified by using write! instead of pad
    #[test]
    fn test_color_family_display() {
        assert_eq!(ColorFamily::OrangeBrown.to_string(), "Orange/Brown");
        assert_eq!(format!("{:15}|", ColorFamily::Blue), "Blue           |");
    }

    // Tests tone buckets and the saturated red exclusion
    // Verified by dropping the pure red branch
    #[test]
    fn test_tone_classification() {
        assert_eq!(Tone::classify([230, 100, 100]), None);
        assert_eq!(Tone::classify([200, 100, 100]), Some(Tone::Warm));
        assert_eq!(Tone::classify([230, 150, 100]), Some(Tone::Warm));
        assert_eq!(Tone::classify([0x1f, 0x47, 0x88]), Some(Tone::Cool));
        assert_eq!(Tone::classify([40, 40, 40]), Some(Tone::Neutral));
        assert_eq!(Tone::classify([40, 90, 40]), Some(Tone::Neutral));
    }
}
