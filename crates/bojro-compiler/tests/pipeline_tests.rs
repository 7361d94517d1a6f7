//! Pipeline tests: end-to-end runs, syntax error reporting, the gallery,
//! the session cache, and the explanation seam.

use bojro_compiler::explain::{CONNECT_FALLBACK, EMPTY_FALLBACK};
use bojro_compiler::{
    explain_code, gallery, parse, render, run, run_with, source_hash, suggest_refactor, tokenize,
    view_ast, ErrorCode, ExplainError, Explainer, RunConfig, RunPhase, Session,
};
use std::cell::RefCell;

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}

/// Explainer double: replies with a fixed result and records prompts.
struct FakeExplainer {
    reply: Result<String, ExplainError>,
    prompts: RefCell<Vec<String>>,
}

impl FakeExplainer {
    fn replying(reply: Result<String, ExplainError>) -> Self {
        Self {
            reply,
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Explainer for FakeExplainer {
    fn explain(&self, prompt: &str) -> Result<String, ExplainError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.reply.clone()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// End-to-end runs
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_prints() {
    let report = run(r#"print("x"); print(5);"#);
    assert!(report.success);
    assert_eq!(report.output, lines(&["x", "5"]));
    assert_eq!(report.phase, Some(RunPhase::Completed));
    assert_eq!(report.rendered.as_deref(), Some("__print(\"x\");\n__print(5);\n"));
}

#[test]
fn test_run_arithmetic() {
    assert_eq!(run("print(2 + 3 * 4);").output, lines(&["14"]));
}

#[test]
fn test_runtime_fault_is_last_line() {
    let report = run("int a = 1;\nprint(a);\nprint(c);\nprint(a);");
    assert!(!report.success);
    assert!(report.error.is_none());
    assert_eq!(report.phase, Some(RunPhase::Faulted));
    assert_eq!(report.output, lines(&["1", "Error: c is not defined"]));
}

#[test]
fn test_syntax_error_produces_no_output() {
    let report = run("print(1);\nint a = 5\nprint(a);");
    assert!(!report.success);
    assert!(report.output.is_empty());
    assert!(report.rendered.is_none());
    assert!(report.phase.is_none());
    let err = report.error.as_ref().map(|e| (e.line(), e.token.as_str()));
    assert_eq!(err, Some((3, "print")));
}

#[test]
fn test_unknown_leading_token_is_syntax_error() {
    let err = parse("int a = 1;\n+ a;").unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.code, ErrorCode::UNEXPECTED_TOKEN);
    assert_eq!(err.to_string(), "Unexpected token at line 2: +");
}

#[test]
fn test_run_with_limits() {
    let config = RunConfig {
        step_limit: 500,
        max_output_lines: 1_000,
    };
    let report = run_with("while (1) { print(1); }", config);
    assert_eq!(report.output.last().map(String::as_str), Some("Error: step limit exceeded"));
    // program + 4 steps per iteration
    assert_eq!(report.output.len(), 125);

    let config = RunConfig {
        step_limit: 500,
        max_output_lines: 10,
    };
    let report = run_with("while (1) { print(1); }", config);
    assert_eq!(report.output.len(), 11);
    assert_eq!(report.output[10], "Error: output limit exceeded");
}

#[test]
fn test_report_json() {
    let json = run("print(1);").to_json();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"output\":[\"1\"]"));
    assert!(json.contains("\"phase\":\"completed\""));
    assert!(!json.contains("\"error\""));

    let json = run("print(1)").to_json();
    assert!(json.contains("\"code\":\"E101\"") || json.contains("\"code\":101"));
    assert!(json.contains("\"line\":1"));
}

#[test]
fn test_source_hash() {
    let report = run("print(1);");
    assert_eq!(report.source_hash, source_hash("print(1);"));
    assert_eq!(report.source_hash.len(), 64);
    assert_eq!(
        source_hash(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Other entry points
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_tokenize() {
    let tokens = tokenize("লিখো(1);");
    assert_eq!(tokens.len(), 6);
    assert!(tokens[5].is_eof());
}

#[test]
fn test_render() {
    assert_eq!(
        render("int a = 1; a = a + 1;").as_deref(),
        Ok("let a = 1;\na = a + 1;\n")
    );
    assert!(render("int = 1;").is_err());
}

#[test]
fn test_view_ast() {
    let view = view_ast("int a = 1; print(a);").unwrap();
    let text = view.to_text();
    assert!(text.starts_with("Program\n  body [2]\n"));
    assert!(text.contains("VariableDeclaration var_type=integer name=a"));
    assert!(text.contains("expression: Identifier a"));
    assert_eq!(view.node_count(), 5);

    let text = view_ast(r#"print("x"); print(007);"#).unwrap().to_text();
    assert!(text.contains("expression: Literal x\n"));
    assert!(text.contains("expression: Literal 7\n"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Gallery
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_gallery_has_five_programs() {
    let slugs: Vec<_> = gallery::slugs().collect();
    assert_eq!(
        slugs,
        vec!["hello-world", "addition", "if-else", "while-loop", "fibonacci"]
    );
}

#[test]
fn test_every_gallery_program_runs_clean() {
    for example in gallery::EXAMPLES {
        let report = run(example.source);
        assert!(report.success, "{} failed: {:?}", example.slug, report);
        assert_eq!(
            report.output,
            lines(example.expected_output),
            "{} output",
            example.slug
        );
    }
}

#[test]
fn test_fibonacci_output() {
    let example = gallery::find("fibonacci").unwrap();
    assert_eq!(
        run(example.source).output,
        lines(&["0", "1", "1", "2", "3", "5", "8", "13", "21", "34"])
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Session
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_session_caches_last_good_parse() {
    let mut session = Session::default();
    assert!(session.program().is_none());

    let report = session.run("print(1);");
    assert_eq!(report.output, lines(&["1"]));
    let first_hash = session.cached_hash().map(str::to_string);
    assert_eq!(first_hash.as_deref(), Some(source_hash("print(1);").as_str()));

    // A broken edit keeps the previous tree.
    let report = session.run("print(1");
    assert!(report.error.is_some());
    assert_eq!(session.cached_hash().map(str::to_string), first_hash);
    assert_eq!(session.program().map(|p| p.body.len()), Some(1));

    session.run("print(1); print(2);");
    assert_eq!(session.program().map(|p| p.body.len()), Some(2));
    assert!(session.view().is_some());
}

#[test]
fn test_session_reuses_tree_for_same_source() {
    let mut session = Session::default();
    let first = session.parse("int a = 1;").unwrap().clone();
    let second = session.parse("int a = 1;").unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn test_session_runs_fresh_each_time() {
    let mut session = Session::new(RunConfig::default());
    let a = session.run("int n = 1; n = n + 1; print(n);");
    let b = session.run("int n = 1; n = n + 1; print(n);");
    assert_eq!(a, b);
    assert_eq!(b.output, lines(&["2"]));
}

// ══════════════════════════════════════════════════════════════════════════════
// Explanation seam
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_explain_passes_reply_through() {
    let fake = FakeExplainer::replying(Ok("It prints one.".to_string()));
    assert_eq!(explain_code(&fake, "লিখো(1);"), "It prints one.");
    let prompts = fake.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("লিখো(1);"));
    assert!(prompts[0].contains("- if -> যদি"));
}

#[test]
fn test_explain_fallbacks() {
    let failing = FakeExplainer::replying(Err(ExplainError::NotConfigured));
    assert_eq!(explain_code(&failing, "x"), CONNECT_FALLBACK);

    let empty = FakeExplainer::replying(Ok("  \n".to_string()));
    assert_eq!(explain_code(&empty, "x"), EMPTY_FALLBACK);
}

#[test]
fn test_closure_explainer() {
    let echo = |prompt: &str| -> Result<String, ExplainError> { Ok(format!("{} chars", prompt.len())) };
    assert!(explain_code(&echo, "print(1);").ends_with(" chars"));
}

#[test]
fn test_refactor_falls_back_to_source() {
    let failing = FakeExplainer::replying(Err(ExplainError::Request("timeout".into())));
    assert_eq!(suggest_refactor(&failing, "print(1);"), "print(1);");

    let rewriting = FakeExplainer::replying(Ok("লিখো(1);".to_string()));
    assert_eq!(suggest_refactor(&rewriting, "print(1);"), "লিখো(1);");
    assert!(rewriting.prompts.borrow()[0].contains("Only output the code"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_pipeline_determinism_100_iterations() {
    for example in gallery::EXAMPLES {
        let first = run(example.source);
        for i in 0..100 {
            assert_eq!(first, run(example.source), "{} iteration {i}", example.slug);
        }
    }
}
