//! The Unitlab curriculum.
//!
//! Immutable configuration data: fifteen modules in fixed catalogue order,
//! each with a description, a formula, a worked example, one practice question
//! with a numeric answer, and free-form lesson text. Nothing here is created
//! or mutated at runtime; learner state lives in `unitlab-progress`.
//!
//! Every [`ModuleSlug`](unitlab_types::ModuleSlug) has exactly one
//! [`ModuleContent`] entry, so content lookup is infallible.

mod content;
mod theory;

pub use theory::{TheoryStep, theory_steps};

use unitlab_types::ModuleSlug;

/// Number of steps in a module's fixed step sequence. A record at this step
/// with the completion flag set is terminal.
pub const FINAL_STEP: u32 = 6;

/// Coins granted exactly once per completed module.
pub const COINS_PER_MODULE: u32 = 50;

/// Relative tolerance for practice answers. The course accepts anything
/// within ±2% of the expected value, so rounding differences in multi-step
/// calculations do not fail a learner.
pub const ANSWER_TOLERANCE: f64 = 0.02;

/// Static content of one curriculum module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleContent {
    pub slug: ModuleSlug,
    pub description: &'static str,
    pub formula: &'static str,
    pub example: WorkedExample,
    pub practice: Practice,
    pub theory: &'static str,
}

/// A worked example shown before the practice question.
#[derive(Debug, Clone, Copy)]
pub struct WorkedExample {
    pub description: &'static str,
    pub calculation: &'static str,
    pub answer: f64,
}

/// The module's practice question with its expected numeric answer.
#[derive(Debug, Clone, Copy)]
pub struct Practice {
    pub question: &'static str,
    pub expected: f64,
    pub hint: &'static str,
}

impl Practice {
    /// Whether `answer` is within [`ANSWER_TOLERANCE`] of the expected value.
    #[must_use]
    pub fn check(&self, answer: f64) -> bool {
        answer.is_finite() && (answer - self.expected).abs() <= self.expected.abs() * ANSWER_TOLERANCE
    }

    /// Parse learner input and check it in one step.
    ///
    /// Returns `None` when the input is not a number at all. A comma decimal
    /// separator is accepted; the course UI normalized `3,5` to `3.5` before
    /// grading and learners type both.
    #[must_use]
    pub fn check_text(&self, input: &str) -> Option<bool> {
        let parsed: f64 = input.trim().replace(',', ".").parse().ok()?;
        Some(self.check(parsed))
    }
}

/// Content for one module. Infallible: the catalogue covers every slug.
#[must_use]
pub fn content(slug: ModuleSlug) -> &'static ModuleContent {
    &content::CONTENT[(slug.id() - 1) as usize]
}

/// The whole catalogue, in order.
#[must_use]
pub fn modules() -> &'static [ModuleContent] {
    content::CONTENT
}

/// Number of modules in the catalogue.
#[must_use]
pub fn len() -> usize {
    content::CONTENT.len()
}
