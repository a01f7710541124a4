//! Report template registration.
//!
//! Reports are parameterized resources: there is no fixed list of report
//! URIs, only the template clients fill in with a project path. This is
//! the scheme registration the host sees.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use super::uri::SCHEME;

/// Get all registered resource templates.
pub fn report_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: format!("{SCHEME}:{{path}}"),
            name: "Project Analysis Report".to_string(),
            title: Some("projspec Report".to_string()),
            description: Some(
                "Analysis report for the project directory at the given absolute path, \
                 generated on demand by the projspec tool"
                    .to_string(),
            ),
            mime_type: Some("text/html".to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_templates() {
        let templates = report_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "projspec:{path}");
        assert_eq!(templates[0].raw.mime_type.as_deref(), Some("text/html"));
    }
}
