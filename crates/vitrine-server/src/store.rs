//! Artifact persistence and listing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use vitrine_render::{validate_id, ArtifactDescriptor, RenderError, Renderer};

/// URL prefix rendered documents are served under.
pub const ARTIFACTS_PREFIX: &str = "/artifacts";

/// A stored artifact reference returned from create/update.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredArtifact {
    pub id: String,
    pub url: String,
    #[serde(skip)]
    pub path: PathBuf,
}

/// A listing entry derived from storage metadata.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtifactEntry {
    pub id: String,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The artifact store.
///
/// Rendering writes documents and listing scans the same directory. Writes
/// to the same id are serialized through a per-id lock, so an update never
/// interleaves with a create for that artifact; distinct ids proceed
/// concurrently.
pub struct ArtifactStore {
    renderer: Renderer,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ArtifactStore {
    /// Create a store writing into the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer: Renderer::new(output_dir),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Render a descriptor and store the document, replacing any previous
    /// document with the same id.
    pub async fn put(
        &self,
        descriptor: &ArtifactDescriptor,
    ) -> Result<StoredArtifact, RenderError> {
        // Validate before taking a lock so garbage ids never populate the
        // lock map.
        validate_id(&descriptor.id)?;

        let lock = self.lock_for(&descriptor.id).await;
        let _guard = lock.lock().await;

        let path = self.renderer.render(descriptor).await?;

        Ok(StoredArtifact {
            id: descriptor.id.clone(),
            url: Self::url_for(&descriptor.id),
            path,
        })
    }

    /// List rendered artifacts by scanning the output directory.
    ///
    /// Storage read errors degrade to an empty list; listing never fails.
    pub async fn list(&self) -> Vec<ArtifactEntry> {
        match self.scan().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to scan artifacts directory: {}", e);
                Vec::new()
            }
        }
    }

    /// The URL a given artifact id is served under.
    pub fn url_for(id: &str) -> String {
        format!("{ARTIFACTS_PREFIX}/{id}.html")
    }

    /// The directory rendered documents live in.
    pub fn output_dir(&self) -> &Path {
        self.renderer.output_dir()
    }

    async fn lock_for(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(id.to_string()).or_default().clone()
    }

    async fn scan(&self) -> std::io::Result<Vec<ArtifactEntry>> {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(self.renderer.output_dir()).await?;

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(id) = name.strip_suffix(".html") else {
                continue;
            };

            let modified = entry.metadata().await?.modified()?;

            entries.push(ArtifactEntry {
                id: id.to_string(),
                url: Self::url_for(id),
                created_at: DateTime::<Utc>::from(modified),
            });
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vitrine_render::{CONTENT_TYPE_CODE, CONTENT_TYPE_HTML};

    fn descriptor(id: &str, content_type: &str, payload: &str) -> ArtifactDescriptor {
        ArtifactDescriptor {
            id: id.to_string(),
            content_type: content_type.to_string(),
            payload: payload.to_string(),
            language: None,
            component: None,
        }
    }

    #[tokio::test]
    async fn stores_and_lists_artifacts() {
        let temp = tempdir().unwrap();
        let store = ArtifactStore::new(temp.path().join("artifacts"));

        let stored = store
            .put(&descriptor("t1", CONTENT_TYPE_HTML, "<p>hi</p>"))
            .await
            .unwrap();

        assert_eq!(stored.url, "/artifacts/t1.html");

        let entries = store.list().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "t1");
        assert_eq!(entries[0].url, "/artifacts/t1.html");
    }

    #[tokio::test]
    async fn update_keeps_a_single_listing_entry() {
        let temp = tempdir().unwrap();
        let store = ArtifactStore::new(temp.path().join("artifacts"));

        store
            .put(&descriptor("t4", CONTENT_TYPE_HTML, "<p>one</p>"))
            .await
            .unwrap();
        let stored = store
            .put(&descriptor("t4", CONTENT_TYPE_HTML, "<p>two</p>"))
            .await
            .unwrap();

        let entries = store.list().await;
        assert_eq!(entries.len(), 1);

        let html = std::fs::read_to_string(&stored.path).unwrap();
        assert!(html.contains("<p>two</p>"));
        assert!(!html.contains("<p>one</p>"));
    }

    #[tokio::test]
    async fn listing_an_empty_store_returns_no_entries() {
        let temp = tempdir().unwrap();
        let store = ArtifactStore::new(temp.path().join("never-created"));

        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn listing_ignores_foreign_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("artifacts");
        let store = ArtifactStore::new(&dir);

        store
            .put(&descriptor("t1", CONTENT_TYPE_HTML, "<p>hi</p>"))
            .await
            .unwrap();
        std::fs::write(dir.join("notes.txt"), "not an artifact").unwrap();

        let entries = store.list().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "t1");
    }

    #[tokio::test]
    async fn distinct_ids_render_concurrently() {
        let temp = tempdir().unwrap();
        let store = ArtifactStore::new(temp.path().join("artifacts"));

        let desc_a = descriptor("a", CONTENT_TYPE_HTML, "<p>a</p>");
        let desc_b = descriptor("b", CONTENT_TYPE_CODE, "let b = 1;");
        let a = store.put(&desc_a);
        let b = store.put(&desc_b);

        let (a, b) = tokio::join!(a, b);
        a.unwrap();
        b.unwrap();

        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn invalid_ids_never_touch_storage() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("artifacts");
        let store = ArtifactStore::new(&dir);

        let err = store
            .put(&descriptor("../escape", CONTENT_TYPE_HTML, "<p>x</p>"))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::InvalidId(_)));
        assert!(!dir.exists());
    }
}
