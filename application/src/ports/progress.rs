//! Progress notification port
//!
//! Defines the interface for reporting progress while a profile is built.

use profiler_domain::Phase;

/// Callback for progress updates during the pipeline
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a task completes within a phase
    fn on_task_complete(&self, phase: &Phase, task: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);

    /// Called when cached results make a phase unnecessary
    fn on_phase_skipped(&self, _phase: &Phase, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _task: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
