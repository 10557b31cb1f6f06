//! The résumé document tree — the snapshot every core function operates on.
//!
//! Serialized as camelCase JSON, the same shape the editing surface keeps in
//! memory and the optimization pass returns. Every field carries a serde
//! default so a partial or malformed candidate deserializes with absent
//! fields treated as empty rather than failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Contact block at the top of the résumé. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// One work-experience or project entry. Projects may additionally carry an
/// optional display link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionEntry {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub role_type: String,
    pub responsibilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadershipEntry {
    pub id: String,
    pub title: String,
    pub organization: String,
}

/// One skills row: a category name plus a comma-separated skill list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub id: String,
    pub category: String,
    pub skills: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    pub additional_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationEntry {
    pub id: String,
    pub details: String,
}

/// The full résumé snapshot. A pure tree: `id` fields give entries a stable
/// rendering identity but nothing references across sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub work_experience: Vec<PositionEntry>,
    pub projects: Vec<PositionEntry>,
    pub leadership: Vec<LeadershipEntry>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub publications: Vec<PublicationEntry>,
}

impl Default for ResumeDocument {
    /// Placeholder document the editing surface starts from: one blank entry
    /// per section so the forms have a row to type into, publications empty.
    fn default() -> Self {
        let blank = |id: &str| PositionEntry {
            id: id.to_string(),
            responsibilities: vec![String::new()],
            ..PositionEntry::default()
        };
        ResumeDocument {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            work_experience: vec![blank("1")],
            projects: vec![blank("1")],
            leadership: vec![LeadershipEntry {
                id: "1".to_string(),
                ..LeadershipEntry::default()
            }],
            skills: vec![SkillCategory {
                id: "1".to_string(),
                ..SkillCategory::default()
            }],
            education: vec![EducationEntry {
                id: "1".to_string(),
                ..EducationEntry::default()
            }],
            publications: vec![],
        }
    }
}

/// Toggles for the optional sections. The summary has no explicit flag — it
/// is shown whenever it is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionVisibility {
    pub projects: bool,
    pub leadership: bool,
    pub publications: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        SectionVisibility {
            projects: false,
            leadership: true,
            publications: false,
        }
    }
}

/// Persistence row: one document per user, replaced wholesale on save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub user_id: Uuid,
    pub document: Value,
    pub show_projects: bool,
    pub show_leadership: bool,
    pub show_publications: bool,
    pub job_description: String,
    pub updated_at: DateTime<Utc>,
}

impl DocumentRow {
    pub fn visibility(&self) -> SectionVisibility {
        SectionVisibility {
            projects: self.show_projects,
            leadership: self.show_leadership,
            publications: self.show_publications,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_has_one_blank_entry_per_section() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.work_experience.len(), 1);
        assert_eq!(doc.work_experience[0].id, "1");
        assert_eq!(doc.work_experience[0].responsibilities, vec![String::new()]);
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.leadership.len(), 1);
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.education.len(), 1);
        assert!(doc.publications.is_empty());
        assert!(doc.summary.is_empty());
    }

    #[test]
    fn test_default_visibility_matches_initial_toggles() {
        let vis = SectionVisibility::default();
        assert!(!vis.projects);
        assert!(vis.leadership);
        assert!(!vis.publications);
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let doc = ResumeDocument::default();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"workExperience\""));
        assert!(json.contains("\"additionalInfo\""));
        assert!(json.contains("\"roleType\""));
        // github is optional and absent by default
        assert!(!json.contains("\"github\""));
    }

    #[test]
    fn test_partial_candidate_fills_missing_sections_with_defaults() {
        // A candidate that only carries a summary — every other section falls
        // back to the placeholder default instead of failing to parse.
        let json = r#"{"summary": "Seasoned platform engineer."}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.summary, "Seasoned platform engineer.");
        assert_eq!(doc.work_experience.len(), 1);
        assert!(doc.publications.is_empty());
    }

    #[test]
    fn test_unknown_extra_fields_are_ignored() {
        let json = r#"{"summary": "x", "somethingNew": {"a": 1}}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.summary, "x");
    }

    #[test]
    fn test_document_round_trips() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.name = "Ada Lovelace".to_string();
        doc.personal_info.github = Some("adal".to_string());
        doc.work_experience[0].position = "Staff Engineer".to_string();
        doc.work_experience[0].responsibilities =
            vec!["Led the storage team".to_string(), String::new()];
        doc.projects[0].link_name = Some("demo".to_string());
        doc.projects[0].link_url = Some("https://example.com/demo".to_string());

        let json = serde_json::to_string(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_row_visibility_maps_columns() {
        let row = DocumentRow {
            user_id: Uuid::new_v4(),
            document: serde_json::json!({}),
            show_projects: true,
            show_leadership: false,
            show_publications: true,
            job_description: String::new(),
            updated_at: Utc::now(),
        };
        let vis = row.visibility();
        assert!(vis.projects);
        assert!(!vis.leadership);
        assert!(vis.publications);
    }
}
