//! JSX to plain-script transpilation.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{JsxRuntime, TransformOptions, Transformer};

use crate::detect::detect_component_name;

/// Errors that can occur while transpiling component source.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Transform failed: {0}")]
    Transform(String),
}

/// A transpiled component module.
#[derive(Debug, Clone)]
pub struct Transpiled {
    /// Browser-executable script.
    pub code: String,

    /// Best-guess component name detected from the source, if any.
    pub component: Option<String>,
}

/// Transpile JSX component source to plain script.
///
/// Failure here means the whole render call fails; callers must never fall
/// back to a partially rendered document.
pub fn transpile(source: &str) -> Result<Transpiled, CompileError> {
    let allocator = Allocator::default();

    let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        return Err(CompileError::Syntax(join_diagnostics(&parsed.errors)));
    }

    let mut program = parsed.program;

    let scoping = SemanticBuilder::new()
        .build(&program)
        .semantic
        .into_scoping();

    // Classic runtime so the emitted calls resolve against the React UMD
    // global loaded by the document skeleton.
    let mut options = TransformOptions::default();
    options.jsx.runtime = JsxRuntime::Classic;

    let transformed = Transformer::new(&allocator, Path::new("artifact.jsx"), &options)
        .build_with_scoping(scoping, &mut program);
    if !transformed.errors.is_empty() {
        return Err(CompileError::Transform(join_diagnostics(&transformed.errors)));
    }

    let code = Codegen::new().build(&program).code;

    Ok(Transpiled {
        code,
        component: detect_component_name(source),
    })
}

fn join_diagnostics(errors: &[OxcDiagnostic]) -> String {
    errors
        .iter()
        .map(|e| e.message.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
