//! Preview typography derived from the density scale.
//!
//! Base values match the print stylesheet: 9pt body text, 16px name line,
//! 12px section margins, 6px item margins, 3px bullet spacing, 1.3 line
//! height. Scaled values keep per-field floors so a fully compressed page
//! stays legible.

use serde::{Deserialize, Serialize};

const BASE_FONT_SIZE_PT: f64 = 9.0;
const BASE_NAME_SIZE_PX: f64 = 16.0;
const BASE_SECTION_MARGIN_PX: f64 = 12.0;
const BASE_ITEM_MARGIN_PX: f64 = 6.0;
const BASE_BULLET_SPACING_PX: f64 = 3.0;
const BASE_LINE_HEIGHT: f64 = 1.3;

const MIN_FONT_SIZE_PT: f64 = 8.0;
const MIN_NAME_SIZE_PX: f64 = 14.0;

/// Resolved style values the client applies verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStyles {
    pub font_size_pt: f64,
    pub name_size_px: f64,
    pub section_margin_px: f64,
    pub item_margin_px: f64,
    pub bullet_spacing_px: f64,
    pub line_height: f64,
}

impl PreviewStyles {
    /// Unscaled base styles (scale 1.0).
    pub fn base() -> Self {
        Self::scaled(1.0)
    }

    /// Styles at the given density scale. Font sizes never drop below their
    /// legibility floor; line height stays fixed since the wrap estimate
    /// already accounts for it.
    pub fn scaled(scale: f64) -> Self {
        PreviewStyles {
            font_size_pt: scale_with_floor(BASE_FONT_SIZE_PT, scale, MIN_FONT_SIZE_PT),
            name_size_px: scale_with_floor(BASE_NAME_SIZE_PX, scale, MIN_NAME_SIZE_PX),
            section_margin_px: round2(BASE_SECTION_MARGIN_PX * scale),
            item_margin_px: round2(BASE_ITEM_MARGIN_PX * scale),
            bullet_spacing_px: round2(BASE_BULLET_SPACING_PX * scale),
            line_height: BASE_LINE_HEIGHT,
        }
    }
}

fn scale_with_floor(base: f64, scale: f64, floor: f64) -> f64 {
    round2((base * scale).max(floor))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_one_returns_base_values() {
        let styles = PreviewStyles::scaled(1.0);
        assert_eq!(styles, PreviewStyles::base());
        assert_eq!(styles.font_size_pt, 9.0);
        assert_eq!(styles.name_size_px, 16.0);
        assert_eq!(styles.section_margin_px, 12.0);
        assert_eq!(styles.line_height, 1.3);
    }

    #[test]
    fn test_floor_scale_shrinks_but_stays_legible() {
        let styles = PreviewStyles::scaled(0.94);
        assert!(styles.font_size_pt < 9.0);
        assert!(styles.font_size_pt >= MIN_FONT_SIZE_PT);
        assert!(styles.name_size_px < 16.0);
        assert!(styles.name_size_px >= MIN_NAME_SIZE_PX);
        assert!(styles.section_margin_px < 12.0);
    }

    #[test]
    fn test_line_height_is_not_scaled() {
        assert_eq!(PreviewStyles::scaled(0.94).line_height, 1.3);
    }

    #[test]
    fn test_font_floors_engage_on_extreme_scales() {
        // Scales below the supported range still clamp to the floors.
        let styles = PreviewStyles::scaled(0.5);
        assert_eq!(styles.font_size_pt, MIN_FONT_SIZE_PT);
        assert_eq!(styles.name_size_px, MIN_NAME_SIZE_PX);
    }
}
