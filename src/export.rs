//! Export rendering
//!
//! Turns a [`Digest`] into the text handed to download, clipboard or print
//! handlers. Nothing here touches the filesystem.

use serde::{Deserialize, Serialize};

use crate::pipeline::artifacts::Digest;

/// Heading used by every export format
pub const EXPORT_TITLE: &str = "Meeting Summary";

const PRINT_STYLE: &str = "body{font:14px/1.6 ui-sans-serif,system-ui;margin:40px} \
                           h1{font-size:22px;margin:0 0 12px} h2{font-size:18px;margin:20px 0 8px}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    PlainText,
    Markdown,
    /// Standalone HTML page meant for the browser's print-to-PDF
    PrintHtml,
}

impl ExportFormat {
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::PrintHtml => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "text/plain",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::PrintHtml => "text/html",
        }
    }
}

/// Render `digest` in the requested format
pub fn render_export(digest: &Digest, format: ExportFormat) -> String {
    match format {
        // Plain text and Markdown share one body; it reads fine either way.
        ExportFormat::PlainText | ExportFormat::Markdown => markdown_body(digest),
        ExportFormat::PrintHtml => print_document(digest),
    }
}

impl Digest {
    /// Shorthand for [`render_export`]
    pub fn export(&self, format: ExportFormat) -> String {
        render_export(self, format)
    }
}

fn markdown_body(digest: &Digest) -> String {
    let mut blocks = vec![format!("# {EXPORT_TITLE}")];

    let summary = digest.summary.trim();
    if !summary.is_empty() {
        blocks.push(summary.to_string());
    }
    if !digest.action_items.is_empty() {
        blocks.push(format!("\n## Action Items\n{}", bullet_list(&digest.action_items)));
    }
    if !digest.decisions.is_empty() {
        blocks.push(format!("\n## Decisions\n{}", bullet_list(&digest.decisions)));
    }

    blocks.join("\n\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_document(digest: &Digest) -> String {
    let mut body = format!(
        "<h1>{EXPORT_TITLE}</h1><p>{}</p>",
        escape_html(&digest.summary)
    );
    if !digest.action_items.is_empty() {
        body.push_str("<h2>Action Items</h2>");
        body.push_str(&html_list(&digest.action_items));
    }
    if !digest.decisions.is_empty() {
        body.push_str("<h2>Decisions</h2>");
        body.push_str(&html_list(&digest.decisions));
    }

    format!(
        "<!doctype html><html><head><title>{EXPORT_TITLE}</title><style>{PRINT_STYLE}</style></head><body>{}</body></html>",
        body.replace('\n', "<br/>")
    )
}

fn html_list(items: &[String]) -> String {
    let entries: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{entries}</ul>")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
