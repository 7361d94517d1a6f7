//! Bojro pipeline as a WASM module for browser environments.
//!
//! This crate exposes the Bojro pipeline via `wasm-bindgen`, suitable for an
//! in-browser editor.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run, parse_ast } from 'bojro-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(run('লিখো("হ্যালো");'));
//! // { success: true, output: ["হ্যালো"], rendered: "...", phase: "completed", ... }
//! ```

use bojro_types::ast_view::ViewNode;
use bojro_types::SyntaxError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Result of a parse-only request.
#[derive(Serialize)]
struct AstResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    ast: Option<ViewNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<SyntaxError>,
}

/// Result of a render-only request.
#[derive(Serialize)]
struct RenderResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rendered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<SyntaxError>,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| serialization_failure(&e))
}

fn serialization_failure(error: &dyn std::fmt::Display) -> String {
    serde_json::json!({
        "success": false,
        "error": { "message": format!("Serialization error: {error}") },
    })
    .to_string()
}

/// Run a Bojro program.
///
/// Returns a JSON string containing a `RunReport`:
/// ```json
/// {
///   "success": true,
///   "output": ["x", "5"],
///   "rendered": "__print(\"x\");\n__print(5);\n",
///   "phase": "completed",
///   "steps": 5,
///   "source_hash": "…"
/// }
/// ```
///
/// On a syntax error, `success` is `false`, `output` is empty and `error`
/// holds the structured error. A runtime fault keeps `output`, ending with
/// its `Error: ...` line.
#[wasm_bindgen]
pub fn run(source: &str) -> String {
    to_json(&bojro_compiler::run(source))
}

/// Parse without running and return the generic tree view as JSON.
#[wasm_bindgen]
pub fn parse_ast(source: &str) -> String {
    let result = match bojro_compiler::view_ast(source) {
        Ok(ast) => AstResult {
            success: true,
            ast: Some(ast),
            error: None,
        },
        Err(e) => AstResult {
            success: false,
            ast: None,
            error: Some(e),
        },
    };
    to_json(&result)
}

/// Parse and return the rendered program text as JSON.
#[wasm_bindgen]
pub fn render(source: &str) -> String {
    let result = match bojro_compiler::render(source) {
        Ok(rendered) => RenderResult {
            success: true,
            rendered: Some(rendered),
            error: None,
        },
        Err(e) => RenderResult {
            success: false,
            rendered: None,
            error: Some(e),
        },
    };
    to_json(&result)
}

/// Return the token stream as a JSON array.
#[wasm_bindgen]
pub fn tokens(source: &str) -> String {
    to_json(&bojro_compiler::tokenize(source))
}

/// Return the explanation prompt for `source`, for hosts that call their
/// own completion service.
#[wasm_bindgen]
pub fn explain_prompt(source: &str) -> String {
    bojro_compiler::explain::explain_prompt(source)
}

/// Return the bundled example programs as an array of
/// `{ slug, title, source, expected_output }` objects.
#[wasm_bindgen]
pub fn examples() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(bojro_compiler::EXAMPLES).map_err(JsValue::from)
}

/// Return the compiler version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
