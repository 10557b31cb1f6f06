//! Section-level change summarizer for optimization candidates.
//!
//! Compares an original and a candidate document and produces short notices
//! for the comparison view, one per changed section. The report is advisory:
//! it never blocks applying a candidate, so the checklist is deliberately
//! fixed — education and leadership are not reported even when they differ.
//! Equality is structural over the serialized section value, so reordering
//! entries counts as a change.

pub mod handlers;

use serde::Serialize;

use crate::models::document::{ResumeDocument, SectionVisibility};

/// Serialized-value comparison: order-sensitive for sequences, total over any
/// serializable section.
fn section_changed<T: Serialize>(original: &T, candidate: &T) -> bool {
    serde_json::to_value(original).ok() != serde_json::to_value(candidate).ok()
}

/// Produces the ordered change notices between two document snapshots.
///
/// Checked sections, in order: summary, work experience, projects (only when
/// visible), publications (only when visible), skills, personal info.
pub fn summarize_changes(
    original: &ResumeDocument,
    candidate: &ResumeDocument,
    visibility: &SectionVisibility,
) -> Vec<String> {
    let mut changes = Vec::new();

    if original.summary != candidate.summary {
        changes.push("Professional Summary optimized".to_string());
    }

    if section_changed(&original.work_experience, &candidate.work_experience) {
        changes.push("Work Experience enhanced".to_string());
    }

    if visibility.projects && section_changed(&original.projects, &candidate.projects) {
        changes.push("Projects section improved".to_string());
    }

    if visibility.publications && section_changed(&original.publications, &candidate.publications) {
        changes.push("Publications section enhanced".to_string());
    }

    if section_changed(&original.skills, &candidate.skills) {
        changes.push("Skills section tailored".to_string());
    }

    if section_changed(&original.personal_info, &candidate.personal_info) {
        changes.push("Professional title refined".to_string());
    }

    changes
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
