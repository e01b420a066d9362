//! HTML report generator
//!
//! Generates a self-contained HTML grade report with embedded CSS. Grades are
//! color coded by GPA band.

use crate::core::grading::gpa::base_points;
use crate::core::report::{display_grade, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{profile}}", &escape(ctx.profile));
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

        output = output.replace("{{course_rows}}", &Self::generate_course_rows(ctx));
        output = output.replace("{{period_rows}}", &Self::generate_period_rows(ctx));
        output = output.replace("{{warnings}}", &Self::generate_warnings(ctx));

        output
    }

    /// Generate per-course table rows
    fn generate_course_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for (summary, weights) in ctx.rows() {
            let _ = writeln!(
                html,
                "<tr><td class=\"name\">{}</td><td>{}</td><td>{}/{}/{}</td>{}{}{}{}<td class=\"{}\"><strong>{:.0}</strong></td><td>{:.1}</td></tr>",
                escape(&summary.name),
                summary.rigor,
                weights.major,
                weights.minor,
                weights.other,
                grade_cell(summary.semesters[0]),
                grade_cell(summary.exams[0]),
                grade_cell(summary.semesters[1]),
                grade_cell(summary.exams[1]),
                grade_class(summary.final_grade),
                summary.final_grade,
                summary.weighted_points
            );
        }

        html
    }

    /// Generate six-weeks table rows
    fn generate_period_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for summary in &ctx.rollup.courses {
            let cells: String = summary.periods.iter().map(|g| grade_cell(*g)).collect();
            let _ = writeln!(
                html,
                "<tr><td class=\"name\">{}</td>{cells}</tr>",
                escape(&summary.name)
            );
        }

        html
    }

    fn generate_warnings(ctx: &ReportContext) -> String {
        if ctx.warnings.is_empty() {
            return String::new();
        }

        let mut html = String::from("<div class=\"warnings\"><h2>Warnings</h2><ul>\n");
        for warning in &ctx.warnings {
            let _ = writeln!(html, "<li>{}</li>", escape(warning));
        }
        html.push_str("</ul></div>");
        html
    }
}

fn grade_cell(grade: Option<f64>) -> String {
    grade.map_or_else(
        || format!("<td>{}</td>", display_grade(None)),
        |g| format!("<td class=\"{}\">{}</td>", grade_class(g), display_grade(Some(g))),
    )
}

fn grade_class(grade: f64) -> &'static str {
    match base_points(grade) {
        p if p >= 4.0 => "grade-a",
        p if p >= 3.0 => "grade-b",
        p if p >= 1.0 => "grade-c",
        _ => "grade-f",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
