//! QR code generation as SVG path data.
//!
//! The card links back to the user's public profile through a scannable
//! code. Encoding is done at error correction level H, so up to a quarter
//! of the modules may be obscured (stickers, glare) and the code still
//! scans.

use qrcode::{Color, EcLevel, QrCode};

/// Build the dark-module path of a QR code for `data`, scaled to fill a
/// `size` x `size` box anchored at the origin.
///
/// Returns one `d` attribute string (a run of M/h/v/z subpaths, one per
/// dark module) suitable for a single filled `<path>`. Returns `None` when
/// the data cannot be encoded at level H, which for profile URLs only
/// happens if they are absurdly long.
pub fn qr_svg_path(data: &str, size: f64) -> Option<String> {
    let code = match QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H) {
        Ok(code) => code,
        Err(err) => {
            tracing::warn!(error = %err, "QR encoding failed, omitting code");
            return None;
        }
    };

    let width = code.width();
    let colors = code.to_colors();
    let module = size / width as f64;

    let mut path = String::with_capacity(colors.len() * 8);
    for (i, color) in colors.iter().enumerate() {
        if *color == Color::Dark {
            let x = (i % width) as f64 * module;
            let y = (i / width) as f64 * module;
            path.push_str(&format!(
                "M{x:.2} {y:.2}h{module:.2}v{module:.2}h-{module:.2}z"
            ));
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_URL: &str = "https://steamcommunity.com/id/gordon/";

    #[test]
    fn produces_path_data() {
        let path = qr_svg_path(PROFILE_URL, 80.0).unwrap();
        assert!(path.starts_with('M'));
        assert!(path.ends_with('z'));
        // Only the commands a filled module path needs.
        assert!(
            path.chars()
                .all(|c| c.is_ascii_digit() || matches!(c, 'M' | 'h' | 'v' | 'z' | '.' | '-' | ' '))
        );
    }

    #[test]
    fn path_is_deterministic() {
        let a = qr_svg_path(PROFILE_URL, 80.0).unwrap();
        let b = qr_svg_path(PROFILE_URL, 80.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn modules_stay_inside_the_box() {
        let path = qr_svg_path(PROFILE_URL, 80.0).unwrap();
        for cmd in path.split('M').skip(1) {
            let x: f64 = cmd.split_whitespace().next().unwrap().parse().unwrap();
            assert!((0.0..=80.0).contains(&x));
        }
    }

    #[test]
    fn oversized_data_is_rejected() {
        // Level H caps out well below 4KB of binary data.
        let oversized = "x".repeat(4096);
        assert!(qr_svg_path(&oversized, 80.0).is_none());
    }

    #[test]
    fn empty_data_still_encodes() {
        assert!(qr_svg_path("", 80.0).is_some());
    }
}
