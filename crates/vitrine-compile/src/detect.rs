//! Component name detection.

use std::sync::LazyLock;

use regex::Regex;

static COMPONENT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:export\s+)?(?:function|const|class)\s+([A-Z][a-zA-Z0-9]*)")
        .expect("Invalid component name regex")
});

/// Extract the first uppercase `function`/`const`/`class` binding from
/// component source.
///
/// The detected name is handed to the document bootstrap as its preferred
/// mount candidate; detection failure is not an error because the bootstrap
/// falls back to its own probe chain.
pub fn detect_component_name(source: &str) -> Option<String> {
    COMPONENT_NAME_RE
        .captures(source)
        .map(|c| c.get(1).unwrap().as_str().to_string())
}
