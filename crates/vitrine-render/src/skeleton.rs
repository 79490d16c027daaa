//! HTML document skeletons.
//!
//! Each artifact kind has a fixed skeleton; the payload (or the prepared
//! script, for component documents) is the only variable part. Skeletons
//! carry no wall-clock content, so rendering the same descriptor twice
//! yields byte-identical documents.
//!
//! Templates with an `.html` name are HTML-escaped by default; the static
//! markup body and the component script opt out with `safe` because those
//! payloads are injected verbatim by contract.

use minijinja::{context, Environment};

/// Template engine for the three document skeletons.
pub struct SkeletonEngine {
    env: Environment<'static>,
}

impl SkeletonEngine {
    /// Create an engine with the built-in skeletons.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("static.html", STATIC_TEMPLATE)
            .expect("Failed to add static skeleton");
        env.add_template("component.html", COMPONENT_TEMPLATE)
            .expect("Failed to add component skeleton");
        env.add_template("code.html", CODE_TEMPLATE)
            .expect("Failed to add code skeleton");

        Self { env }
    }

    /// Wrap a trusted markup payload verbatim in the static skeleton.
    ///
    /// No sanitization is performed: the caller's markup is injected as-is,
    /// so payloads of untrusted provenance must be sanitized upstream.
    pub fn render_static(&self, id: &str, payload: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("static.html")?;
        tmpl.render(context! { id => id, payload => payload })
    }

    /// Embed a prepared component script (transpiled source plus mount
    /// bootstrap) in the component skeleton.
    pub fn render_component(&self, id: &str, script: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("component.html")?;
        tmpl.render(context! { id => id, script => script })
    }

    /// Wrap literal source code in the listing skeleton.
    ///
    /// The payload is always escaped: source text is display text here,
    /// never markup. The header label and highlighter class token fall back
    /// to fixed defaults when no language is given.
    pub fn render_code(
        &self,
        id: &str,
        payload: &str,
        language: Option<&str>,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("code.html")?;
        tmpl.render(context! {
            id => id,
            payload => payload,
            label => language.unwrap_or("Code"),
            language => language.unwrap_or("javascript"),
        })
    }
}

impl Default for SkeletonEngine {
    fn default() -> Self {
        Self::new()
    }
}

const STATIC_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Artifact {{ id }}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body {
            margin: 0;
            padding: 20px;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        }
        * {
            box-sizing: border-box;
        }
    </style>
</head>
<body>
    {{ payload | safe }}
</body>
</html>"##;

const COMPONENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Component Artifact {{ id }}</title>
    <script src="https://unpkg.com/react@18/umd/react.development.js"></script>
    <script src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body {
            margin: 0;
            padding: 20px;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        }
        * {
            box-sizing: border-box;
        }
    </style>
</head>
<body>
    <div id="root"></div>
    <script>
{{ script | safe }}
    </script>
</body>
</html>"##;

const CODE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Code Artifact {{ id }}</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.1/themes/prism.min.css">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.1/components/prism-core.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.1/plugins/autoloader/prism-autoloader.min.js"></script>
    <style>
        body {
            margin: 0;
            padding: 20px;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        }
        .code-container {
            background: #f8f9fa;
            border-radius: 8px;
            overflow: hidden;
            border: 1px solid #e9ecef;
        }
        .code-header {
            background: #e9ecef;
            padding: 10px 15px;
            font-weight: 600;
            color: #495057;
            font-size: 14px;
        }
        pre {
            margin: 0;
            padding: 15px;
            overflow-x: auto;
        }
        code {
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
        }
    </style>
</head>
<body>
    <div class="code-container">
        <div class="code-header">{{ label }}</div>
        <pre><code class="language-{{ language }}">{{ payload }}</code></pre>
    </div>
</body>
</html>"##;
