//! Presentation-layer implementations of `ProgressReporter`.
//!
//! Application services emit progress events through the
//! `application::ports::ProgressReporter` trait; these types decide how the
//! events reach the terminal.

use std::sync::Mutex;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Plain-text reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ! {message}"` (suppressed when `ctx.quiet`)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "→".cyan());
        }
    }

    fn success(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".green());
        }
    }

    fn warn(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "!".yellow());
        }
    }
}

/// Spinner-backed reporter for interactive terminals. Each `step()` replaces
/// the previous spinner; `success()` freezes it with a checkmark.
#[allow(clippy::expect_used)] // Mutex poisoning is unrecoverable here
pub struct SpinnerReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::expect_used)] // Mutex poisoning is unrecoverable here
impl ProgressReporter for SpinnerReporter {
    fn step(&self, message: &str) {
        let mut current = self.current.lock().expect("reporter lock");
        if let Some(pb) = current.take() {
            pb.finish_and_clear();
        }
        *current = Some(progress::spinner(message));
    }

    fn success(&self, message: &str) {
        let mut current = self.current.lock().expect("reporter lock");
        match current.take() {
            Some(pb) => progress::finish_ok(&pb, message),
            None => println!("✓ {message}"),
        }
    }

    fn warn(&self, message: &str) {
        let current = self.current.lock().expect("reporter lock");
        match current.as_ref() {
            Some(pb) => pb.println(format!("! {message}")),
            None => println!("! {message}"),
        }
    }
}

#[allow(clippy::expect_used)] // Mutex poisoning is unrecoverable here
impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.current.lock().expect("reporter lock").take() {
            pb.finish_and_clear();
        }
    }
}

/// Reporter used by machine-readable output modes: emits nothing.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

/// The reporter variants the install command picks between at runtime.
pub enum InstallReporter<'a> {
    /// Animated spinner (interactive TTY).
    Spinner(SpinnerReporter),
    /// Plain arrow/checkmark lines (non-TTY or `--quiet`).
    Terminal(TerminalReporter<'a>),
    /// No output (`--json`).
    Silent,
}

impl ProgressReporter for InstallReporter<'_> {
    fn step(&self, message: &str) {
        match self {
            InstallReporter::Spinner(r) => r.step(message),
            InstallReporter::Terminal(r) => r.step(message),
            InstallReporter::Silent => {}
        }
    }

    fn success(&self, message: &str) {
        match self {
            InstallReporter::Spinner(r) => r.success(message),
            InstallReporter::Terminal(r) => r.success(message),
            InstallReporter::Silent => {}
        }
    }

    fn warn(&self, message: &str) {
        match self {
            InstallReporter::Spinner(r) => r.warn(message),
            InstallReporter::Terminal(r) => r.warn(message),
            InstallReporter::Silent => {}
        }
    }
}
