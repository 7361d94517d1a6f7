//! Explanation service seam.
//!
//! Builds learner-facing prompts and maps service failures to fixed
//! fallback strings. The transport is whatever implements [`Explainer`];
//! nothing here touches the network, and nothing on the run path calls it.

use bojro_lexer::{Keyword, ALL_KEYWORDS};
use thiserror::Error;
use tracing::warn;

/// Returned when the service fails.
pub const CONNECT_FALLBACK: &str = "Could not connect to AI service. Please check your API Key.";

/// Returned when the service answers with nothing.
pub const EMPTY_FALLBACK: &str = "No explanation available.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    /// No credentials or endpoint configured.
    #[error("explanation service is not configured")]
    NotConfigured,
    #[error("explanation request failed: {0}")]
    Request(String),
}

/// A text-completion service.
pub trait Explainer {
    fn explain(&self, prompt: &str) -> Result<String, ExplainError>;
}

impl<F> Explainer for F
where
    F: Fn(&str) -> Result<String, ExplainError>,
{
    fn explain(&self, prompt: &str) -> Result<String, ExplainError> {
        self(prompt)
    }
}

/// `- print -> লিখো` lines for every keyword that starts a statement.
fn keyword_glossary() -> String {
    let mut seen: Vec<Keyword> = Vec::new();
    let mut out = String::new();
    for (_, kw) in ALL_KEYWORDS {
        if kw.is_reserved() || seen.contains(kw) {
            continue;
        }
        seen.push(*kw);
        out.push_str(&format!("- {} -> {}\n", kw.english(), kw.bengali()));
    }
    out
}

/// The prompt asking for a short explanation of `source`.
pub fn explain_prompt(source: &str) -> String {
    format!(
        "You are an expert compiler engineer for the 'Bojro' (বজ্র) programming language.\n\
         It is a Bengali-based language with syntax similar to C/C++.\n\
         \n\
         Keywords:\n\
         {}\n\
         Please analyze the following code and explain what it does in English, but use the \
         Bengali keywords when referencing specific parts of the code. Keep it brief and helpful \
         for a learner.\n\
         \n\
         Code:\n\
         {source}\n",
        keyword_glossary()
    )
}

/// The prompt asking for a cleaner rewrite of `source`, code only.
pub fn refactor_prompt(source: &str) -> String {
    format!(
        "Refactor the following 'Bojro' (Bengali programming language) code to be more \
         efficient or cleaner.\n\
         Only output the code, nothing else.\n\
         \n\
         Code:\n\
         {source}\n"
    )
}

/// Explain `source`, falling back to a fixed message on failure or an empty reply.
pub fn explain_code(explainer: &dyn Explainer, source: &str) -> String {
    match explainer.explain(&explain_prompt(source)) {
        Ok(reply) if reply.trim().is_empty() => EMPTY_FALLBACK.to_string(),
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "explanation service failed");
            CONNECT_FALLBACK.to_string()
        }
    }
}

/// Ask for a rewrite of `source`; any failure or empty reply returns `source`.
pub fn suggest_refactor(explainer: &dyn Explainer, source: &str) -> String {
    match explainer.explain(&refactor_prompt(source)) {
        Ok(reply) if !reply.trim().is_empty() => reply,
        Ok(_) => source.to_string(),
        Err(e) => {
            warn!(error = %e, "refactor suggestion failed");
            source.to_string()
        }
    }
}
