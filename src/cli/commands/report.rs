//! Report command handler
//!
//! Generates grade reports for the active profile in Markdown or HTML.

use super::load_gradebook;
use grade_pro::config::Config;
use grade_pro::core::report::{
    formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use grade_pro::core::store::CourseStore;
use grade_pro::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Base file name for reports written to the reports directory
const REPORT_FILE_STEM: &str = "grade_report";

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `store` - Course list to report on
/// * `config` - Configuration containing the profile and default output directory
pub fn run(output_file: Option<&Path>, format_str: &str, store: &dyn CourseStore, config: &Config) {
    match generate_report(output_file, format_str, store, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
        }
        Err(err) => {
            error!(
                "Report generation failed for profile {}: {}",
                config.storage.profile,
                err.trim_start_matches("✗ ")
            );
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Write the report to a file in the specified format
fn write_report(ctx: &ReportContext, format: ReportFormat, output_path: &Path) -> Result<(), String> {
    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}")),
        ReportFormat::Html => HtmlReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}")),
    }
}

/// Resolve where the report goes: the explicit path, or the reports directory
fn output_path(
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create directory {}: {e}", parent.display())
            })?;
        }
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!("{REPORT_FILE_STEM}.{}", format.extension())))
}

fn generate_report(
    output_file: Option<&Path>,
    format_str: &str,
    store: &dyn CourseStore,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let book = load_gradebook(store)?;
    let ctx = ReportContext::new(
        &config.storage.profile,
        book.courses(),
        book.weight_warnings(),
    );

    let path = output_path(output_file, format, config)?;
    write_report(&ctx, format, &path)?;
    Ok(path)
}
