//! Interpreter: one render-then-execute run over a parsed program.
//!
//! A run moves through `Idle → Rendering → Executing` and ends in
//! `Completed` or `Faulted`. The first runtime fault stops execution and is
//! appended to the output as one `Error: <message>` line.

use crate::error::EvalError;
use crate::evaluator::Evaluator;
use crate::render::render_program;
use bojro_types::ast::Program;
use serde::Serialize;
use tracing::debug;

/// Default bound on evaluated nodes per run.
pub const DEFAULT_STEP_LIMIT: u64 = 10_000_000;

/// Default bound on printed lines per run.
pub const DEFAULT_MAX_OUTPUT_LINES: usize = 10_000;

/// Per-run resource limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub step_limit: u64,
    pub max_output_lines: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            max_output_lines: DEFAULT_MAX_OUTPUT_LINES,
        }
    }
}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    Idle,
    Rendering,
    Executing,
    Completed,
    Faulted,
}

impl RunPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Completed | RunPhase::Faulted)
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    /// Printed lines, plus the `Error: ...` line when the run faulted.
    pub output: Vec<String>,
    /// The rendered program text.
    pub rendered: String,
    /// `Completed` or `Faulted`.
    pub phase: RunPhase,
    /// The fault, if any.
    #[serde(skip)]
    pub fault: Option<EvalError>,
    /// Steps consumed.
    pub steps: u64,
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        self.phase == RunPhase::Completed
    }
}

/// Runs a program once. Consumed by [`Interpreter::run`]; there is no retry.
pub struct Interpreter {
    config: RunConfig,
    phase: RunPhase,
}

impl Interpreter {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            phase: RunPhase::Idle,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    fn transition(&mut self, next: RunPhase) {
        debug!(from = ?self.phase, to = ?next, "run phase");
        self.phase = next;
    }

    /// Render `program`, then execute it against a fresh environment and
    /// output buffer.
    pub fn run(mut self, program: &Program) -> RunOutcome {
        self.transition(RunPhase::Rendering);
        let rendered = render_program(program);

        self.transition(RunPhase::Executing);
        let mut eval = Evaluator::new(self.config.step_limit, self.config.max_output_lines);
        let fault = eval.exec_program(program).err();

        let mut output = eval.output;
        match &fault {
            Some(err) => {
                debug!(error = %err, steps = eval.steps, "run faulted");
                output.push(err.to_output_line());
                self.transition(RunPhase::Faulted);
            }
            None => self.transition(RunPhase::Completed),
        }

        RunOutcome {
            output,
            rendered,
            phase: self.phase,
            fault,
            steps: eval.steps,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}
