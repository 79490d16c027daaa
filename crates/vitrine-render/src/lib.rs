//! Artifact renderer producing self-contained HTML documents.
//!
//! Takes an artifact descriptor (a text payload plus a declared content
//! type) and deterministically produces a single embeddable HTML document
//! on disk: raw markup wrapped verbatim, component markup transpiled and
//! mounted through a runtime bootstrap, or source code escaped for display.

pub mod bootstrap;
pub mod descriptor;
pub mod renderer;
pub mod skeleton;

pub use descriptor::{
    is_supported_language, validate_component, validate_id, ArtifactDescriptor, ArtifactKind,
    CONTENT_TYPE_CODE, CONTENT_TYPE_COMPONENT, CONTENT_TYPE_HTML, SUPPORTED_LANGUAGES,
};
pub use renderer::{RenderError, Renderer};
pub use skeleton::SkeletonEngine;
