//! Contact-link formatting for the preview header.
//!
//! A full URL displays as a branded label ("LinkedIn", "Portfolio",
//! "GitHub") and links as-is; a bare handle displays verbatim and links to
//! the service's canonical profile URL. Empty values produce no link.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

pub fn linkedin_link(value: &str) -> Option<ContactLink> {
    if value.is_empty() {
        return None;
    }
    Some(if value.starts_with("http") {
        ContactLink {
            label: "LinkedIn".to_string(),
            href: value.to_string(),
        }
    } else {
        ContactLink {
            label: value.to_string(),
            href: format!("https://linkedin.com/in/{value}"),
        }
    })
}

pub fn portfolio_link(value: &str) -> Option<ContactLink> {
    if value.is_empty() {
        return None;
    }
    Some(if value.starts_with("http") {
        ContactLink {
            label: "Portfolio".to_string(),
            href: value.to_string(),
        }
    } else {
        ContactLink {
            label: value.to_string(),
            href: format!("https://{value}"),
        }
    })
}

pub fn github_link(value: &str) -> Option<ContactLink> {
    if value.is_empty() {
        return None;
    }
    Some(if value.starts_with("http") {
        ContactLink {
            label: "GitHub".to_string(),
            href: value.to_string(),
        }
    } else {
        ContactLink {
            label: value.to_string(),
            href: format!("https://github.com/{value}"),
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_produce_no_link() {
        assert_eq!(linkedin_link(""), None);
        assert_eq!(portfolio_link(""), None);
        assert_eq!(github_link(""), None);
    }

    #[test]
    fn test_full_url_displays_branded_label() {
        let link = linkedin_link("https://www.linkedin.com/in/ada").unwrap();
        assert_eq!(link.label, "LinkedIn");
        assert_eq!(link.href, "https://www.linkedin.com/in/ada");
    }

    #[test]
    fn test_bare_handle_links_to_profile() {
        let link = linkedin_link("ada-lovelace").unwrap();
        assert_eq!(link.label, "ada-lovelace");
        assert_eq!(link.href, "https://linkedin.com/in/ada-lovelace");
    }

    #[test]
    fn test_portfolio_bare_domain_gets_scheme() {
        let link = portfolio_link("ada.dev").unwrap();
        assert_eq!(link.label, "ada.dev");
        assert_eq!(link.href, "https://ada.dev");

        let full = portfolio_link("http://ada.dev").unwrap();
        assert_eq!(full.label, "Portfolio");
        assert_eq!(full.href, "http://ada.dev");
    }

    #[test]
    fn test_github_handle_links_to_profile() {
        let link = github_link("adal").unwrap();
        assert_eq!(link.label, "adal");
        assert_eq!(link.href, "https://github.com/adal");
    }
}
