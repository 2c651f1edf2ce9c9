use super::paint;
use crate::application::read_models::{PackageInfo, PackageReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::Style;

/// Inner width of the boxed header and summary
const BOX_WIDTH: usize = 66;

/// Width of section and package rules
const RULE_WIDTH: usize = 64;

/// TextReportFormatter adapter for the human-readable package report
pub struct TextReportFormatter {
    use_color: bool,
}

impl TextReportFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        paint(text, style, self.use_color)
    }

    fn label(&self, text: &str) -> String {
        self.paint(text, Style::new().yellow())
    }
}

/// Helper methods for rendering sections
impl TextReportFormatter {
    fn render_header(&self, output: &mut String, report: &PackageReport) {
        let timestamp = report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
        let lines = [
            format!("╔{}╗", "═".repeat(BOX_WIDTH)),
            format!("║{:^BOX_WIDTH$}║", "HOMEBREW PACKAGE INFORMATION REPORT"),
            format!("║{:^BOX_WIDTH$}║", timestamp),
            format!("╚{}╝", "═".repeat(BOX_WIDTH)),
        ];
        for line in lines {
            output.push_str(&self.paint(&line, Style::new().bold().cyan()));
            output.push('\n');
        }
    }

    fn render_section(&self, output: &mut String, title: &str, packages: &[PackageInfo]) {
        let rule = "━".repeat(RULE_WIDTH);
        let heading = format!(
            "{:^RULE_WIDTH$}",
            format!("{} ({} packages)", title, packages.len())
        );
        output.push('\n');
        output.push_str(&self.paint(&rule, Style::new().bold().cyan()));
        output.push('\n');
        output.push_str(&self.paint(heading.trim_end(), Style::new().bold().cyan()));
        output.push('\n');
        output.push_str(&self.paint(&rule, Style::new().cyan()));
        output.push('\n');

        for info in packages {
            self.render_package(output, info);
        }
    }

    fn render_package(&self, output: &mut String, info: &PackageInfo) {
        let rule = "=".repeat(RULE_WIDTH);
        output.push('\n');
        output.push_str(&self.paint(&rule, Style::new().bold().blue()));
        output.push('\n');
        output.push_str(&self.paint(&format!("📦 {}", info.name), Style::new().bold().green()));
        output.push('\n');
        output.push_str(&self.paint(&rule, Style::new().blue()));
        output.push('\n');

        output.push_str(&format!("{} {}\n", self.label("Type:"), info.kind.label()));
        if !info.description.is_empty() {
            output.push_str(&format!("{} {}\n", self.label("Description:"), info.description));
        }
        if !info.version.is_empty() {
            output.push_str(&format!("{} {}\n", self.label("Version:"), info.version));
        }
        if !info.homepage.is_empty() {
            output.push_str(&format!("{} {}\n", self.label("Homepage:"), info.homepage));
        }

        if let Some(dependencies) = &info.dependencies {
            let listed = if dependencies.is_empty() {
                "None".to_string()
            } else {
                dependencies.join(", ")
            };
            output.push_str(&format!("{} {}\n", self.label("Dependencies:"), listed));
        }
        if let Some(required_by) = info.required_by.as_ref().filter(|r| !r.is_empty()) {
            output.push_str(&format!(
                "{} {}\n",
                self.label("Required by:"),
                required_by.join(", ")
            ));
        }

        if info.is_error() {
            let message = info.error.as_deref().unwrap_or("Unknown error");
            output.push_str(&self.paint(&format!("⚠ Error: {}", message), Style::new().red()));
            output.push('\n');
        }
    }

    fn render_summary(&self, output: &mut String, report: &PackageReport) {
        let summary = &report.summary;
        let rows = [
            ("Total Formulas:", summary.total_formulas),
            ("Total Casks:", summary.total_casks),
            ("Total Packages:", summary.total_packages),
        ];

        let mut lines = vec![
            format!("╔{}╗", "═".repeat(BOX_WIDTH)),
            format!("║{:^BOX_WIDTH$}║", "SUMMARY"),
            format!("╠{}╣", "═".repeat(BOX_WIDTH)),
        ];
        for (label, count) in rows {
            let cell = format!("  {:<16}{}", label, count);
            lines.push(format!("║{:<BOX_WIDTH$}║", cell));
        }
        lines.push(format!("╚{}╝", "═".repeat(BOX_WIDTH)));

        output.push('\n');
        for line in lines {
            output.push_str(&self.paint(&line, Style::new().bold().cyan()));
            output.push('\n');
        }
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &PackageReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_section(&mut output, "FORMULAS", &report.formulas);
        self.render_section(&mut output, "CASKS", &report.casks);
        self.render_summary(&mut output, report);

        Ok(output)
    }
}
