//! Progress reporting for profile builds

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use profiler_application::{NoProgress, ProgressNotifier};
use profiler_domain::Phase;
use std::sync::Mutex;

/// Reports progress with one bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name());
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, task: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), task)
            } else {
                format!("{} {}", "x".red(), task)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }

    fn on_phase_skipped(&self, phase: &Phase, reason: &str) {
        // eprintln would tear the bars
        let line = skipped_line(phase, reason);
        if self.multi.println(&line).is_err() {
            eprintln!("{}", line);
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout carries only the report.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &Phase, task: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), task);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), task);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }

    fn on_phase_skipped(&self, phase: &Phase, reason: &str) {
        eprintln!("{}", skipped_line(phase, reason));
    }
}

fn skipped_line(phase: &Phase, reason: &str) -> String {
    format!(
        "{} {} skipped ({})",
        "-".dimmed(),
        phase.display_name().bold(),
        reason
    )
}

/// How progress is shown for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Hidden,
    Bars,
    Lines,
}

impl ProgressMode {
    /// Bars on an interactive stderr, plain stderr lines otherwise
    pub fn select(quiet: bool, stderr_is_terminal: bool) -> Self {
        if quiet {
            ProgressMode::Hidden
        } else if stderr_is_terminal {
            ProgressMode::Bars
        } else {
            ProgressMode::Lines
        }
    }

    pub fn notifier(self) -> Box<dyn ProgressNotifier> {
        match self {
            ProgressMode::Hidden => Box::new(NoProgress),
            ProgressMode::Bars => Box::new(ProgressReporter::new()),
            ProgressMode::Lines => Box::new(SimpleProgress),
        }
    }
}
