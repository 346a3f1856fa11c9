//! Release notes file conventions: separator detection, extraction of the
//! "next release" section and rotation of the file after a release.
//!
//! A notes file looks like this:
//!
//! ```text
//! Next release
//! ============
//!
//! ### New features
//! ...
//!
//! ###################
//!
//! 1.2.0
//! ============
//! ...
//! ```
//!
//! Everything above the first separator line is the draft for the upcoming
//! release; everything below it is history.
use regex::Regex;
use std::sync::LazyLock;
use tera::{Context, Tera};

use crate::{error::PerformerError, result::Result};

/// Legacy separator written by every rotation.
pub const RELEASE_NOTES_SEPARATOR: &str = "###################";

/// Heading of the draft section, replaced by the tag once released.
pub const NEXT_RELEASE_HEADING: &str = "Next release";

/// Default base url for ticket links in the fresh template.
pub const DEFAULT_TICKET_URL: &str = "https://jira.ontotext.com/browse/";

/// Default Tera template for the fresh "next release" section.
pub const DEFAULT_NOTES_TEMPLATE: &str = r#"Next release
============

### New features

* [JIRA-TICKET]({{ ticket_url }}): Some feature

### Improvements

* [JIRA-TICKET]({{ ticket_url }}): Some improvement

### Bug fixes

* [JIRA-TICKET]({{ ticket_url }}): Some bug fix"#;

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{3,}$").unwrap());

/// Returns true if the line marks the end of the "next release" section.
/// The legacy [`RELEASE_NOTES_SEPARATOR`] is one such line.
pub fn is_separator(line: &str) -> bool {
    SEPARATOR_REGEX.is_match(line.trim())
}

/// Extracts the "next release" section to publish as the release body.
///
/// Returns `None` when the content has no separator line.
pub fn extract_next_release(content: &str, tag: &str) -> Option<String> {
    let mut body = String::new();

    for line in content.lines() {
        if is_separator(line) {
            return Some(body.replace(NEXT_RELEASE_HEADING, tag));
        }
        body.push_str(line);
        body.push('\n');
    }

    None
}

/// Content written back over an existing notes file: the fresh template, a
/// separator, then the previous content with its draft heading renamed to
/// the released tag.
pub fn rotate(fresh: &str, previous: &str, tag: &str) -> String {
    format!(
        "{fresh}\n\n{RELEASE_NOTES_SEPARATOR}\n\n{}",
        previous.replace(NEXT_RELEASE_HEADING, tag)
    )
}

/// Content for a notes file that did not exist before the release.
pub fn initial(fresh: &str) -> String {
    format!("{fresh}\n{RELEASE_NOTES_SEPARATOR}\n")
}

/// Commit message used for both rotation and creation.
pub fn commit_message(path: &str, tag: &str) -> String {
    format!("Updating {path} after release {tag}")
}

/// Tera template producing the fresh "next release" section.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesTemplate {
    pub template: String,
    pub ticket_url: String,
}

impl Default for NotesTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_NOTES_TEMPLATE.into(),
            ticket_url: DEFAULT_TICKET_URL.into(),
        }
    }
}

impl NotesTemplate {
    pub fn render(&self) -> Result<String> {
        let mut context = Context::new();
        context.insert("ticket_url", &self.ticket_url);

        let rendered = Tera::one_off(&self.template, &context, false)
            .map_err(PerformerError::from)?;

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "Next release
============

### New features

* [PROJ-1](https://tracker/PROJ-1): Shiny thing

###################

1.0.0
============

* Initial release
";

    #[test]
    fn recognizes_legacy_separator() {
        assert!(is_separator(RELEASE_NOTES_SEPARATOR));
        assert!(is_separator("   ###################   "));
    }

    #[test]
    fn recognizes_any_run_of_three_or_more_hashes() {
        assert!(is_separator("###"));
        assert!(is_separator("#####"));
        assert!(is_separator("\t####\t"));
    }

    #[test]
    fn rejects_headings_and_short_runs() {
        assert!(!is_separator("##"));
        assert!(!is_separator("### New features"));
        assert!(!is_separator("###-###"));
        assert!(!is_separator(""));
        assert!(!is_separator("Next release"));
    }

    #[test]
    fn extracts_section_above_separator_with_tag() {
        let body = extract_next_release(NOTES, "2.0.0").unwrap();

        assert_eq!(
            body,
            "2.0.0\n============\n\n### New features\n\n\
             * [PROJ-1](https://tracker/PROJ-1): Shiny thing\n\n"
        );
        assert!(!body.contains(RELEASE_NOTES_SEPARATOR));
        assert!(!body.contains("Initial release"));
    }

    #[test]
    fn stops_at_first_separator() {
        let content = "Next release\nfirst\n###\nsecond\n####\nthird\n";
        let body = extract_next_release(content, "v3").unwrap();
        assert_eq!(body, "v3\nfirst\n");
    }

    #[test]
    fn replaces_every_heading_occurrence() {
        let content = "Next release\nsee Next release notes\n###\n";
        let body = extract_next_release(content, "v1").unwrap();
        assert_eq!(body, "v1\nsee v1 notes\n");
    }

    #[test]
    fn no_separator_yields_no_body() {
        let content = "Next release\n============\n\n* something\n";
        assert!(extract_next_release(content, "1.0.0").is_none());
        assert!(extract_next_release("", "1.0.0").is_none());
    }

    #[test]
    fn separator_on_first_line_yields_empty_body() {
        let body = extract_next_release("###\nhistory\n", "1.0.0").unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let content = "Next release\r\n* fix\r\n###################\r\nold\r\n";
        let body = extract_next_release(content, "1.1.0").unwrap();
        assert_eq!(body, "1.1.0\n* fix\n");
    }

    #[test]
    fn rotate_keeps_history_below_fresh_section() {
        let rotated = rotate("FRESH", NOTES, "2.0.0");

        assert!(rotated.starts_with("FRESH\n\n###################\n\n"));
        assert!(rotated.contains("2.0.0\n============"));
        assert!(rotated.contains("1.0.0\n============"));
        assert!(!rotated.contains(NEXT_RELEASE_HEADING));
    }

    #[test]
    fn initial_content_ends_with_separator() {
        assert_eq!(initial("FRESH"), "FRESH\n###################\n");
    }

    #[test]
    fn commit_message_names_path_and_tag() {
        assert_eq!(
            commit_message("RELEASE-NOTES.md", "1.0.0"),
            "Updating RELEASE-NOTES.md after release 1.0.0"
        );
    }

    #[test]
    fn default_template_renders_ticket_links() {
        let rendered = NotesTemplate::default().render().unwrap();

        assert!(rendered.starts_with("Next release\n============\n"));
        assert!(rendered.contains("### New features"));
        assert!(rendered.contains("### Improvements"));
        assert!(rendered.contains("### Bug fixes"));
        assert!(rendered.contains(
            "* [JIRA-TICKET](https://jira.ontotext.com/browse/): Some bug fix"
        ));
        assert!(rendered.ends_with("Some bug fix"));
    }

    #[test]
    fn custom_ticket_url_is_used() {
        let template = NotesTemplate {
            ticket_url: "https://issues.example.org/".into(),
            ..NotesTemplate::default()
        };
        let rendered = template.render().unwrap();
        assert!(rendered.contains("(https://issues.example.org/)"));
        assert!(!rendered.contains("jira.ontotext.com"));
    }

    #[test]
    fn invalid_template_fails_to_render() {
        let template = NotesTemplate {
            template: "{{ unclosed".into(),
            ..NotesTemplate::default()
        };
        assert!(template.render().is_err());
    }

    #[test]
    fn rendered_template_does_not_count_as_history() {
        let fresh = NotesTemplate::default().render().unwrap();
        let created = initial(&fresh);
        let body = extract_next_release(&created, "1.0.0").unwrap();
        assert!(body.starts_with("1.0.0\n============"));
        assert!(body.contains("Some feature"));
    }
}
