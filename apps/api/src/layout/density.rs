//! Content-density estimator for the one-page preview.
//!
//! Maps a document snapshot to a typography scale factor in [0.94, 1.00] by
//! approximating how many printed lines the content occupies. This is an
//! intentional proxy for a real text-layout pass — character counts against
//! fixed wrap widths, not glyph metrics. The browser reflows text regardless;
//! the scale only needs to bias overall density downward when content is
//! heavy, so O(1)-per-field simplicity wins over layout fidelity.
//!
//! The wrap widths, line target, and floor are empirical tuning constants,
//! not physical law. They live in [`DensityConfig`] and are held in app state.

use serde::{Deserialize, Serialize};

use crate::models::document::{PositionEntry, ResumeDocument, SectionVisibility};

/// Tuning constants for the line-count heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityConfig {
    /// Fixed line count charged for the name/title/contact header block.
    pub header_lines: u32,
    /// Heading plus surrounding spacing charged once per active section.
    pub section_overhead_lines: u32,
    /// Approximate characters per printed line for the summary paragraph.
    pub summary_wrap_chars: usize,
    /// Approximate characters per printed line for bullet and detail text.
    pub body_wrap_chars: usize,
    /// Line count at which the document still fits one page unscaled.
    pub target_lines: u32,
    /// Lower bound on the scale factor.
    pub min_scale: f64,
}

/// Returns the default density config: a 70-line page at 60-char summary
/// wrapping and 80-char body wrapping, scaling no further down than 0.94.
pub fn default_density_config() -> DensityConfig {
    DensityConfig {
        header_lines: 4,
        section_overhead_lines: 2,
        summary_wrap_chars: 60,
        body_wrap_chars: 80,
        target_lines: 70,
        min_scale: 0.94,
    }
}

/// Lines a text occupies when wrapped at `width` characters. Empty text is
/// zero lines.
fn wrapped_lines(text: &str, width: usize) -> u32 {
    let chars = text.chars().count();
    if chars == 0 {
        0
    } else {
        ((chars + width - 1) / width) as u32
    }
}

/// Lines contributed by one work-experience or project entry: a header row
/// plus the wrapped non-blank responsibilities.
fn position_entry_lines(entry: &PositionEntry, config: &DensityConfig) -> u32 {
    let mut lines = 1;
    for resp in &entry.responsibilities {
        let resp = resp.trim();
        if !resp.is_empty() {
            lines += wrapped_lines(resp, config.body_wrap_chars);
        }
    }
    lines
}

/// Estimates the total printed-line count for a document.
///
/// Work experience, skills, and education always count; summary, projects,
/// leadership, and publications count only when visible and non-empty.
/// Heading overhead is charged for work experience and for each active
/// optional section; publications carry no per-entry lines, only overhead.
pub fn estimate_lines(
    doc: &ResumeDocument,
    visibility: &SectionVisibility,
    config: &DensityConfig,
) -> u32 {
    let summary = doc.summary.trim();
    let summary_active = !summary.is_empty();
    let projects_active = visibility.projects && !doc.projects.is_empty();
    let leadership_active = visibility.leadership && !doc.leadership.is_empty();
    let publications_active = visibility.publications && !doc.publications.is_empty();

    let mut lines = config.header_lines;

    // Work experience heading is always rendered.
    lines += config.section_overhead_lines;
    for active in [
        summary_active,
        projects_active,
        leadership_active,
        publications_active,
    ] {
        if active {
            lines += config.section_overhead_lines;
        }
    }

    if summary_active {
        lines += wrapped_lines(summary, config.summary_wrap_chars);
    }

    for entry in &doc.work_experience {
        lines += position_entry_lines(entry, config);
    }

    if projects_active {
        for entry in &doc.projects {
            lines += position_entry_lines(entry, config);
        }
    }

    if leadership_active {
        lines += doc.leadership.len() as u32;
    }

    lines += doc.skills.len() as u32;

    for edu in &doc.education {
        lines += 1;
        let info = edu.additional_info.trim();
        if !info.is_empty() {
            lines += wrapped_lines(info, config.body_wrap_chars);
        }
    }

    lines
}

/// Maps a document to its typography scale factor.
///
/// Content within the line target keeps scale 1.0; heavier content shrinks
/// proportionally down to `min_scale`. The result is clamped to [min_scale,
/// 1.0] and rounded to two decimals. Pure and total: absent collections and
/// blank strings simply contribute nothing.
pub fn estimate_scale(
    doc: &ResumeDocument,
    visibility: &SectionVisibility,
    config: &DensityConfig,
) -> f64 {
    let total = estimate_lines(doc, visibility, config);
    let scale = if total > config.target_lines {
        (config.target_lines as f64 / total as f64).max(config.min_scale)
    } else {
        1.0
    };
    (scale.min(1.0) * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
