//! Component markup transpilation.
//!
//! Turns JSX component source into plain script that can execute inside a
//! rendered artifact document. The transform targets the classic
//! `React.createElement` runtime because the documents load the component
//! runtime as a UMD global rather than through a bundler.

pub mod detect;
pub mod transpile;

pub use detect::detect_component_name;
pub use transpile::{transpile, CompileError, Transpiled};
