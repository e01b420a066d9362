//! Markdown report generator
//!
//! Generates grade reports as Markdown tables, which render well in GitHub,
//! GitLab, and most note-taking tools.

use crate::core::report::{display_grade, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{profile}}", ctx.profile);
        output = output.replace(
            "{{yearly_average}}",
            &format!("{:.0}", ctx.rollup.yearly_average),
        );
        output = output.replace(
            "{{unweighted_gpa}}",
            &format!("{:.2}", ctx.rollup.unweighted_gpa),
        );
        output = output.replace(
            "{{weighted_gpa}}",
            &format!("{:.2}", ctx.rollup.weighted_gpa),
        );
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());

        output = output.replace("{{course_table}}", &Self::generate_course_table(ctx));
        output = output.replace("{{period_table}}", &Self::generate_period_table(ctx));
        output = output.replace("{{warnings}}", &Self::generate_warnings(ctx));

        output
    }

    /// Generate the per-course semester and year table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str(
            "| Course | Type | Weights | S1 | Exam 1 | S2 | Exam 2 | Year | GPA Points |\n",
        );
        table.push_str("|---|---|---|---|---|---|---|---|---|\n");

        for (summary, weights) in ctx.rows() {
            let _ = writeln!(
                table,
                "| {} | {} | {}/{}/{} | {} | {} | {} | {} | {:.0} | {:.1} |",
                summary.name,
                summary.rigor,
                weights.major,
                weights.minor,
                weights.other,
                display_grade(summary.semesters[0]),
                display_grade(summary.exams[0]),
                display_grade(summary.semesters[1]),
                display_grade(summary.exams[1]),
                summary.final_grade,
                summary.weighted_points
            );
        }

        table
    }

    /// Generate the six-weeks grade table
    fn generate_period_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Course | SW1 | SW2 | SW3 | SW4 | SW5 | SW6 |\n");
        table.push_str("|---|---|---|---|---|---|---|\n");

        for summary in &ctx.rollup.courses {
            let cells: Vec<String> = summary.periods.iter().map(|g| display_grade(*g)).collect();
            let _ = writeln!(table, "| {} | {} |", summary.name, cells.join(" | "));
        }

        table
    }

    fn generate_warnings(ctx: &ReportContext) -> String {
        if ctx.warnings.is_empty() {
            return String::new();
        }

        let mut section = String::from("## Warnings\n\n");
        for warning in &ctx.warnings {
            let _ = writeln!(section, "- ⚠️ {warning}");
        }
        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
