//! Bojro pipeline: orchestrates lexing, parsing, rendering and execution.
//!
//! ```text
//! Bojro Source → Lexer → Parser → Render → Execute → output lines
//! ```
//!
//! Every entry point takes source text and builds fresh state. [`Session`]
//! additionally keeps the most recent successful parse for tree viewers.

pub mod explain;
pub mod gallery;

use bojro_eval::{Interpreter, RunOutcome};
use bojro_lexer::Token;
use bojro_types::ast::Program;
use bojro_types::ast_view::{view_program, ViewNode};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

pub use bojro_eval::{RunConfig, RunPhase, DEFAULT_MAX_OUTPUT_LINES, DEFAULT_STEP_LIMIT};
pub use bojro_types::{ErrorCode, SourceFile, SyntaxError};
pub use explain::{explain_code, suggest_refactor, ExplainError, Explainer};
pub use gallery::{Example, EXAMPLES};

/// Name given to source text that did not come from a file.
pub const DEFAULT_FILE_NAME: &str = "main.bojro";

/// Hex SHA-256 of `source`.
pub fn source_hash(source: &str) -> String {
    format!("{:x}", Sha256::digest(source.as_bytes()))
}

/// Run the lexer only.
pub fn tokenize(source: &str) -> Vec<Token> {
    bojro_lexer::tokenize(source)
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    parse_file(&SourceFile::new(DEFAULT_FILE_NAME, source))
}

/// Lex and parse a named source file.
pub fn parse_file(source_file: &SourceFile) -> Result<Program, SyntaxError> {
    bojro_parser::parse(source_file)
}

/// Parse and render to JavaScript-like text.
pub fn render(source: &str) -> Result<String, SyntaxError> {
    render_file(&SourceFile::new(DEFAULT_FILE_NAME, source))
}

/// Parse and render a named source file.
pub fn render_file(source_file: &SourceFile) -> Result<String, SyntaxError> {
    parse_file(source_file).map(|program| bojro_eval::render_program(&program))
}

/// Parse and build the generic tree view.
pub fn view_ast(source: &str) -> Result<ViewNode, SyntaxError> {
    view_ast_file(&SourceFile::new(DEFAULT_FILE_NAME, source))
}

/// Parse a named source file and build the generic tree view.
pub fn view_ast_file(source_file: &SourceFile) -> Result<ViewNode, SyntaxError> {
    parse_file(source_file).map(|program| view_program(&program))
}

/// Parse and run with default limits.
pub fn run(source: &str) -> RunReport {
    run_with(source, RunConfig::default())
}

/// Parse and run with explicit limits.
pub fn run_with(source: &str, config: RunConfig) -> RunReport {
    run_file(&SourceFile::new(DEFAULT_FILE_NAME, source), config)
}

/// Parse and run a named source file.
pub fn run_file(source_file: &SourceFile, config: RunConfig) -> RunReport {
    let hash = source_hash(&source_file.source);
    match parse_file(source_file) {
        Ok(program) => RunReport::from_outcome(Interpreter::new(config).run(&program), hash),
        Err(e) => RunReport::from_syntax_error(e, hash),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Run Report
// ══════════════════════════════════════════════════════════════════════════════

/// The result of one pipeline run.
///
/// A syntax error leaves `output` empty; a runtime fault leaves the printed
/// lines followed by one `Error: ...` line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Parsed and ran to completion without a fault.
    pub success: bool,
    pub output: Vec<String>,
    /// Rendered program text; absent when parsing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
    /// The syntax error that stopped the pipeline before execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SyntaxError>,
    /// Final run phase; absent when parsing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<RunPhase>,
    pub steps: u64,
    /// SHA-256 of the source text.
    pub source_hash: String,
}

impl RunReport {
    fn from_outcome(outcome: RunOutcome, source_hash: String) -> Self {
        Self {
            success: outcome.is_ok(),
            output: outcome.output,
            rendered: Some(outcome.rendered),
            error: None,
            phase: Some(outcome.phase),
            steps: outcome.steps,
            source_hash,
        }
    }

    fn from_syntax_error(error: SyntaxError, source_hash: String) -> Self {
        Self {
            success: false,
            output: Vec::new(),
            rendered: None,
            error: Some(error),
            phase: None,
            steps: 0,
            source_hash,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Session
// ══════════════════════════════════════════════════════════════════════════════

/// A pipeline handle that remembers the latest successful parse.
///
/// A failed parse leaves the previous tree in place, so a viewer keeps
/// showing the last good program while the source is mid-edit.
#[derive(Debug, Default)]
pub struct Session {
    config: RunConfig,
    cached: Option<CachedProgram>,
}

#[derive(Debug)]
struct CachedProgram {
    hash: String,
    program: Program,
}

impl Session {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            cached: None,
        }
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// Parse `source`, reusing the cached tree when the source is unchanged.
    pub fn parse(&mut self, source: &str) -> Result<&Program, SyntaxError> {
        let hash = source_hash(source);
        let cached = match self.cached.take() {
            Some(cached) if cached.hash == hash => {
                debug!(hash = %hash, "session cache hit");
                cached
            }
            previous => match parse(source) {
                Ok(program) => {
                    debug!(hash = %hash, statements = program.body.len(), "session cache updated");
                    CachedProgram { hash, program }
                }
                Err(e) => {
                    self.cached = previous;
                    return Err(e);
                }
            },
        };
        Ok(&self.cached.insert(cached).program)
    }

    /// Parse (or reuse) and run `source`.
    pub fn run(&mut self, source: &str) -> RunReport {
        let config = self.config;
        let hash = source_hash(source);
        match self.parse(source) {
            Ok(program) => RunReport::from_outcome(Interpreter::new(config).run(program), hash),
            Err(e) => RunReport::from_syntax_error(e, hash),
        }
    }

    /// The most recent successfully parsed program.
    pub fn program(&self) -> Option<&Program> {
        self.cached.as_ref().map(|c| &c.program)
    }

    /// Tree view of the most recent successfully parsed program.
    pub fn view(&self) -> Option<ViewNode> {
        self.program().map(view_program)
    }

    /// Hash of the source behind the cached program.
    pub fn cached_hash(&self) -> Option<&str> {
        self.cached.as_ref().map(|c| c.hash.as_str())
    }
}
