use crate::error::{AppError, Result};

use palette::Srgb;

pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || AppError::InvalidColor {
        value: hex.to_string(),
    };

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };

    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded to nearest.
pub fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    let weighted = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471;
    ((weighted + 0x8000) >> 16) as u8
}

/// `a * b / 255`, rounded to nearest.
pub fn multiply_channel(a: u8, b: u8) -> u8 {
    let product = a as u32 * b as u32;
    ((product + 127) / 255).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#b536ff").unwrap(), Srgb::new(181, 54, 255));
        assert_eq!(hex_to_rgb("39FF14").unwrap(), Srgb::new(57, 255, 20));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#zz0000").is_err());
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#ééé0").is_err());
    }

    #[test]
    fn luma_uses_601_weights() {
        assert_eq!(luma_601([255, 0, 0]), 76);
        assert_eq!(luma_601([0, 255, 0]), 150);
        assert_eq!(luma_601([0, 0, 255]), 29);
        assert_eq!(luma_601([100, 150, 200]), 141);
        assert_eq!(luma_601([0, 60, 30]), 39);
    }

    #[test]
    fn luma_keeps_neutral_grays() {
        for v in 0..=255u8 {
            assert_eq!(luma_601([v, v, v]), v);
        }
    }

    #[test]
    fn multiply_channel_matches_rounded_product() {
        for a in [0u8, 1, 64, 127, 128, 200, 255] {
            for b in [0u8, 1, 50, 128, 245, 255] {
                let expected = (a as f64 * b as f64 / 255.0).round() as u8;
                assert_eq!(multiply_channel(a, b), expected, "a={a} b={b}");
            }
        }
    }

    #[test]
    fn multiply_channel_identity_and_zero() {
        for v in 0..=255u8 {
            assert_eq!(multiply_channel(v, 255), v);
            assert_eq!(multiply_channel(v, 0), 0);
        }
    }
}
