/// Formatter adapters for graph views and package reports
mod graph_text_formatter;
mod json_report_formatter;
mod text_report_formatter;
mod tree_renderer;

pub use graph_text_formatter::GraphTextFormatter;
pub use json_report_formatter::JsonReportFormatter;
pub use text_report_formatter::TextReportFormatter;
pub use tree_renderer::{RenderOptions, TreeRenderer};

use owo_colors::{OwoColorize, Style};

/// Applies `style` to `text` when color output is enabled
fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
