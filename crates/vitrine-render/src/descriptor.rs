//! Artifact descriptor model and input validation.

use serde::{Deserialize, Serialize};

use crate::renderer::RenderError;

/// Wire content type for static HTML artifacts.
pub const CONTENT_TYPE_HTML: &str = "text/html";

/// Wire content type for component markup artifacts.
pub const CONTENT_TYPE_COMPONENT: &str = "application/vnd.ant.react";

/// Wire content type for source listing artifacts.
pub const CONTENT_TYPE_CODE: &str = "application/vnd.ant.code";

/// Language tags the source listing header knows about.
///
/// Unknown tags are still echoed into the document (the highlighter
/// auto-loads grammars by class token); they only lose the known-language
/// labeling guarantee.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "cpp",
    "c",
    "rust",
    "html",
    "css",
    "json",
    "xml",
    "yaml",
    "markdown",
    "sql",
    "bash",
    "shell",
];

/// The three artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Raw HTML injected verbatim into the document body.
    StaticMarkup,

    /// Component (JSX) source, transpiled and mounted in the browser.
    ComponentMarkup,

    /// Literal source code, escaped and syntax highlighted.
    SourceListing,
}

impl ArtifactKind {
    /// Parse a wire content type. The set is closed; anything else is a
    /// hard error.
    pub fn from_content_type(content_type: &str) -> Result<Self, RenderError> {
        match content_type {
            CONTENT_TYPE_HTML => Ok(Self::StaticMarkup),
            CONTENT_TYPE_COMPONENT => Ok(Self::ComponentMarkup),
            CONTENT_TYPE_CODE => Ok(Self::SourceListing),
            other => Err(RenderError::UnsupportedKind(other.to_string())),
        }
    }

    /// The wire content type for this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::StaticMarkup => CONTENT_TYPE_HTML,
            Self::ComponentMarkup => CONTENT_TYPE_COMPONENT,
            Self::SourceListing => CONTENT_TYPE_CODE,
        }
    }
}

/// Input to a render call.
///
/// Descriptors are ephemeral: only the rendered document persists, keyed by
/// `id`. Re-rendering an id overwrites the previous document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactDescriptor {
    /// Storage key; becomes the output filename stem and part of the
    /// document title. Restricted to the id allow-list.
    pub id: String,

    /// Wire content type, see [`ArtifactKind::from_content_type`].
    #[serde(rename = "type")]
    pub content_type: String,

    /// Raw HTML fragment, component source, or literal code.
    #[serde(rename = "code")]
    pub payload: String,

    /// Language tag for source listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Declared component export for component artifacts. The bootstrap
    /// probes this name before any heuristic lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

const MAX_ID_LEN: usize = 128;

/// Validate an artifact id against the filename allow-list.
///
/// Ids are interpolated into filesystem paths and document titles, so they
/// are restricted to ASCII alphanumerics, `-` and `_`, bounded in length.
pub fn validate_id(id: &str) -> Result<(), RenderError> {
    let well_formed = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Ok(())
    } else {
        Err(RenderError::InvalidId(id.to_string()))
    }
}

/// Validate a declared component export name (a plain identifier).
pub fn validate_component(name: &str) -> Result<(), RenderError> {
    let mut chars = name.chars();
    let well_formed = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(RenderError::InvalidComponent(name.to_string()))
    }
}

/// Check whether a language tag is on the known-language list.
pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_closed_kind_set() {
        assert_eq!(
            ArtifactKind::from_content_type("text/html").unwrap(),
            ArtifactKind::StaticMarkup
        );
        assert_eq!(
            ArtifactKind::from_content_type("application/vnd.ant.react").unwrap(),
            ArtifactKind::ComponentMarkup
        );
        assert_eq!(
            ArtifactKind::from_content_type("application/vnd.ant.code").unwrap(),
            ArtifactKind::SourceListing
        );
    }

    #[test]
    fn rejects_unknown_content_types() {
        let err = ArtifactKind::from_content_type("text/plain").unwrap_err();

        assert!(matches!(err, RenderError::UnsupportedKind(_)));
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn kind_round_trips_through_content_type() {
        for kind in [
            ArtifactKind::StaticMarkup,
            ArtifactKind::ComponentMarkup,
            ArtifactKind::SourceListing,
        ] {
            assert_eq!(
                ArtifactKind::from_content_type(kind.content_type()).unwrap(),
                kind
            );
        }
    }

    #[test]
    fn accepts_safe_ids() {
        for id in ["t1", "html_1712345678", "My-Artifact_02"] {
            assert!(validate_id(id).is_ok());
        }
    }

    #[test]
    fn rejects_unsafe_ids() {
        for id in ["", "../evil", "a/b", "a.b", "id with spaces", "id\0", "<b>"] {
            assert!(validate_id(id).is_err(), "expected {id:?} to be rejected");
        }
        assert!(validate_id(&"x".repeat(129)).is_err());
    }

    #[test]
    fn validates_component_names() {
        assert!(validate_component("App").is_ok());
        assert!(validate_component("_Private$2").is_ok());
        assert!(validate_component("").is_err());
        assert!(validate_component("2Fast").is_err());
        assert!(validate_component("window.alert").is_err());
        assert!(validate_component("a'); alert('x").is_err());
    }

    #[test]
    fn knows_common_languages() {
        assert!(is_supported_language("javascript"));
        assert!(is_supported_language("Rust"));
        assert!(!is_supported_language("brainfuck"));
    }

    #[test]
    fn descriptor_uses_wire_field_names() {
        let descriptor = ArtifactDescriptor {
            id: "t1".to_string(),
            content_type: CONTENT_TYPE_CODE.to_string(),
            payload: "print(1)".to_string(),
            language: Some("python".to_string()),
            component: None,
        };

        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["type"], "application/vnd.ant.code");
        assert_eq!(json["code"], "print(1)");
        assert_eq!(json["language"], "python");
        assert!(json.get("component").is_none());
    }
}
