//! Kind dispatch and document storage.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use vitrine_compile::{transpile, CompileError};

use crate::bootstrap::mount_script;
use crate::descriptor::{
    is_supported_language, validate_component, validate_id, ArtifactDescriptor, ArtifactKind,
};
use crate::skeleton::SkeletonEngine;

/// Errors surfaced by a render call.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported artifact type: {0}")]
    UnsupportedKind(String),

    #[error("Invalid artifact id: {0:?}")]
    InvalidId(String),

    #[error("Invalid component name: {0:?}")]
    InvalidComponent(String),

    #[error("Component compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Failed to assemble document: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Renders artifact descriptors into self-contained HTML documents.
///
/// Exactly one file named `{id}.html` is written per render, replacing any
/// previous document with that id. Writes go through a temp file in the
/// output directory and are renamed into place, so a failed render never
/// leaves a partial document visible.
pub struct Renderer {
    output_dir: PathBuf,
    skeletons: SkeletonEngine,
}

impl Renderer {
    /// Create a renderer writing into the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            skeletons: SkeletonEngine::new(),
        }
    }

    /// The directory rendered documents are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The path a given artifact id renders to.
    pub fn document_path(&self, id: &str) -> PathBuf {
        self.output_dir.join(format!("{id}.html"))
    }

    /// Render a descriptor to disk and return the document path.
    ///
    /// Validation failures and compile failures happen before any
    /// filesystem mutation, so a failed call writes nothing.
    pub async fn render(&self, descriptor: &ArtifactDescriptor) -> Result<PathBuf, RenderError> {
        validate_id(&descriptor.id)?;
        let kind = ArtifactKind::from_content_type(&descriptor.content_type)?;

        let html = match kind {
            ArtifactKind::StaticMarkup => self
                .skeletons
                .render_static(&descriptor.id, &descriptor.payload)?,

            ArtifactKind::ComponentMarkup => {
                if let Some(component) = &descriptor.component {
                    validate_component(component)?;
                }

                // The transform is CPU-bound; keep it off the async
                // executor so concurrent renders stay independent.
                let source = descriptor.payload.clone();
                let transpiled = tokio::task::spawn_blocking(move || transpile(&source))
                    .await
                    .map_err(|e| RenderError::Storage(std::io::Error::other(e)))??;

                let declared = descriptor
                    .component
                    .clone()
                    .or_else(|| transpiled.component.clone());
                let script = mount_script(&transpiled.code, declared.as_deref());

                self.skeletons.render_component(&descriptor.id, &script)?
            }

            ArtifactKind::SourceListing => {
                if let Some(language) = &descriptor.language {
                    if !is_supported_language(language) {
                        tracing::warn!("Unknown language tag: {}", language);
                    }
                }

                self.skeletons.render_code(
                    &descriptor.id,
                    &descriptor.payload,
                    descriptor.language.as_deref(),
                )?
            }
        };

        let path = self.write_document(&descriptor.id, html).await?;

        tracing::debug!("Rendered artifact {} to {}", descriptor.id, path.display());

        Ok(path)
    }

    async fn write_document(&self, id: &str, html: String) -> Result<PathBuf, RenderError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.document_path(id);
        let dir = self.output_dir.clone();
        let target = path.clone();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(html.as_bytes())?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CONTENT_TYPE_CODE, CONTENT_TYPE_COMPONENT, CONTENT_TYPE_HTML};
    use tempfile::tempdir;

    fn descriptor(id: &str, content_type: &str, payload: &str) -> ArtifactDescriptor {
        ArtifactDescriptor {
            id: id.to_string(),
            content_type: content_type.to_string(),
            payload: payload.to_string(),
            language: None,
            component: None,
        }
    }

    fn file_count(dir: &Path) -> usize {
        match std::fs::read_dir(dir) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    #[tokio::test]
    async fn renders_static_markup_verbatim() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let path = renderer
            .render(&descriptor("t1", CONTENT_TYPE_HTML, "<p>hi</p>"))
            .await
            .unwrap();

        assert_eq!(path, temp.path().join("t1.html"));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<p>hi</p>"));
    }

    #[tokio::test]
    async fn escapes_source_listings() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let mut desc = descriptor("t2", CONTENT_TYPE_CODE, "<script>");
        desc.language = Some("javascript".to_string());

        let path = renderer.render(&desc).await.unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("language-javascript"));
    }

    #[tokio::test]
    async fn renders_component_documents_with_bootstrap() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let path = renderer
            .render(&descriptor(
                "t3",
                CONTENT_TYPE_COMPONENT,
                "function App() { return <div>hey</div>; }",
            ))
            .await
            .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("React.createElement"));
        assert!(html.contains("module.exports"));
        assert!(html.contains("typeof App !== 'undefined'"));
        assert!(html.contains(r#"var declaredComponent = "App";"#));
        assert!(html.contains(r#"<div id="root"></div>"#));
    }

    #[tokio::test]
    async fn declared_component_wins_over_detection() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let mut desc = descriptor(
            "t3b",
            CONTENT_TYPE_COMPONENT,
            "function Ignored() { return null; }\nfunction Actual() { return null; }",
        );
        desc.component = Some("Actual".to_string());

        let path = renderer.render(&desc).await.unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(r#"var declaredComponent = "Actual";"#));
    }

    #[tokio::test]
    async fn unsupported_kind_writes_nothing() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let err = renderer
            .render(&descriptor("t5", "text/plain", "x"))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::UnsupportedKind(_)));
        assert_eq!(file_count(temp.path()), 0);
    }

    #[tokio::test]
    async fn compile_failure_writes_nothing() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let err = renderer
            .render(&descriptor("t6", CONTENT_TYPE_COMPONENT, "function App( {"))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::Compile(_)));
        assert_eq!(file_count(temp.path()), 0);
    }

    #[tokio::test]
    async fn rejects_path_traversal_ids() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let err = renderer
            .render(&descriptor("../escape", CONTENT_TYPE_HTML, "<p>x</p>"))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::InvalidId(_)));
        assert_eq!(file_count(temp.path()), 0);
    }

    #[tokio::test]
    async fn rejects_malformed_component_names() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        let mut desc = descriptor("t7", CONTENT_TYPE_COMPONENT, "function App() {}");
        desc.component = Some("alert('x')".to_string());

        let err = renderer.render(&desc).await.unwrap_err();

        assert!(matches!(err, RenderError::InvalidComponent(_)));
        assert_eq!(file_count(temp.path()), 0);
    }

    #[tokio::test]
    async fn rendering_is_idempotent() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());
        let desc = descriptor("same", CONTENT_TYPE_HTML, "<p>stable</p>");

        let first_path = renderer.render(&desc).await.unwrap();
        let first = std::fs::read(&first_path).unwrap();

        let second_path = renderer.render(&desc).await.unwrap();
        let second = std::fs::read(&second_path).unwrap();

        assert_eq!(first_path, second_path);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn rerender_overwrites_previous_document() {
        let temp = tempdir().unwrap();
        let renderer = Renderer::new(temp.path());

        renderer
            .render(&descriptor("t4", CONTENT_TYPE_HTML, "<p>before</p>"))
            .await
            .unwrap();
        renderer
            .render(&descriptor("t4", CONTENT_TYPE_HTML, "<p>after</p>"))
            .await
            .unwrap();

        let html = std::fs::read_to_string(temp.path().join("t4.html")).unwrap();
        assert!(html.contains("<p>after</p>"));
        assert!(!html.contains("<p>before</p>"));
        assert_eq!(file_count(temp.path()), 1);
    }
}
