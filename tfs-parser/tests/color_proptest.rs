//! Property-based tests for color literal parsing and canonicalization.

use proptest::prelude::*;
use tfs_parser::Rgba;

fn hex6() -> impl Strategy<Value = String> {
    "[0-9a-f]{6}".prop_map(|digits| format!("#{digits}"))
}

/// 8-digit hex with a non-opaque alpha byte, so the canonical form keeps
/// all eight digits (alpha `ff` collapses to the 6-digit form).
fn hex8_translucent() -> impl Strategy<Value = String> {
    ("[0-9a-f]{6}", 0u8..=0xfe).prop_map(|(rgb, alpha)| format!("#{rgb}{alpha:02x}"))
}

fn hex3() -> impl Strategy<Value = String> {
    "[0-9a-f]{3}".prop_map(|digits| format!("#{digits}"))
}

proptest! {
    #[test]
    fn six_digit_hex_round_trips(raw in hex6()) {
        let color = Rgba::parse(&raw).expect("valid hex parses");
        prop_assert_eq!(color.to_canonical_hex(), raw);
    }

    #[test]
    fn eight_digit_hex_round_trips(raw in hex8_translucent()) {
        let color = Rgba::parse(&raw).expect("valid hex parses");
        prop_assert_eq!(color.to_canonical_hex(), raw);
    }

    #[test]
    fn three_digit_hex_expands_to_doubled_digits(raw in hex3()) {
        let color = Rgba::parse(&raw).expect("valid hex parses");
        let expected: String = std::iter::once('#')
            .chain(raw.chars().skip(1).flat_map(|d| [d, d]))
            .collect();
        prop_assert_eq!(color.to_canonical_hex(), expected);
    }

    #[test]
    fn uppercase_hex_parses_to_same_color(raw in hex6()) {
        let upper = raw.to_ascii_uppercase();
        prop_assert_eq!(Rgba::parse(&raw), Rgba::parse(&upper));
    }

    #[test]
    fn luminance_stays_in_unit_interval(
        r in 0.0f64..=1.0,
        g in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let lum = Rgba::new(r, g, b, 1.0).relative_luminance();
        prop_assert!((0.0..=1.0 + 1e-9).contains(&lum));
    }

    #[test]
    fn blending_toward_white_never_darkens(
        r in 0.0f64..=1.0,
        g in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        factor in 0.0f64..=1.0,
    ) {
        let color = Rgba::new(r, g, b, 1.0);
        let blended = color.blend_toward_white(factor);
        prop_assert!(blended.red >= color.red - 1e-12);
        prop_assert!(blended.green >= color.green - 1e-12);
        prop_assert!(blended.blue >= color.blue - 1e-12);
        prop_assert!(
            blended.relative_luminance() >= color.relative_luminance() - 1e-12
        );
    }
}
