//! Console output formatter for profile reports

use colored::Colorize;
use profiler_application::ProfileReport;

/// Formats profile reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the run summary followed by the profile
    pub fn format(report: &ProfileReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Profile: {}", report.username)));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({} words)\n",
            "Comments:".cyan().bold(),
            report.comment_count,
            report.total_words
        ));

        let cached = if report.chunk_results_cached {
            " [cached]".dimmed().to_string()
        } else {
            String::new()
        };
        output.push_str(&format!(
            "{} {} of ~{} words{}\n",
            "Chunks:".cyan().bold(),
            report.chunks,
            report.chunk_target,
            cached
        ));

        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            report.strategy
        ));

        output.push_str(&Self::section_header("Profile"));
        output.push('\n');
        output.push_str(report.profile.trim());
        output.push('\n');

        output.push_str(&format!(
            "\n{} {}\n",
            "Saved to:".green().bold(),
            report.output_path.display()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format the profile text only
    pub fn format_profile_only(report: &ProfileReport) -> String {
        format!("{}\n", report.profile.trim())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
