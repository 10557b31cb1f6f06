//! The assembled preview model.
//!
//! One parameterized payload replaces per-revision render variants: the
//! client walks `sections` in order and applies `styles` verbatim, so
//! visibility toggles live here instead of being copy-pasted into markup.

use serde::Serialize;

use crate::layout::{estimate_scale, DensityConfig, PreviewStyles};
use crate::models::document::{ResumeDocument, SectionVisibility};
use crate::render::contact::{github_link, linkedin_link, portfolio_link, ContactLink};

/// Sections in render order. Summary, work experience, skills, and education
/// always render (with placeholders when empty); the rest are toggle-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Summary,
    WorkExperience,
    Projects,
    Leadership,
    Skills,
    Education,
    Publications,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBlock {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewModel {
    pub scale: f64,
    pub styles: PreviewStyles,
    pub contact: ContactBlock,
    pub sections: Vec<Section>,
}

/// Builds the preview payload for a document snapshot: density scale, scaled
/// typography, formatted contact links, and the visible sections in order.
pub fn build_preview(
    doc: &ResumeDocument,
    visibility: &SectionVisibility,
    density: &DensityConfig,
) -> PreviewModel {
    let scale = estimate_scale(doc, visibility, density);
    let styles = PreviewStyles::scaled(scale);

    let info = &doc.personal_info;
    let links = [
        linkedin_link(&info.linkedin),
        portfolio_link(&info.portfolio),
        github_link(info.github.as_deref().unwrap_or_default()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut sections = vec![Section::Summary, Section::WorkExperience];
    if visibility.projects && !doc.projects.is_empty() {
        sections.push(Section::Projects);
    }
    if visibility.leadership && !doc.leadership.is_empty() {
        sections.push(Section::Leadership);
    }
    sections.push(Section::Skills);
    sections.push(Section::Education);
    if visibility.publications && !doc.publications.is_empty() {
        sections.push(Section::Publications);
    }

    PreviewModel {
        scale,
        styles,
        contact: ContactBlock {
            phone: info.phone.clone(),
            email: info.email.clone(),
            location: info.location.clone(),
            links,
        },
        sections,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
