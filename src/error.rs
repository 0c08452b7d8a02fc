use crate::source::Span;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which anchor could not be located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// Marker where the fragment begins
    Start,
    /// Marker the fragment runs up to
    End,
}

impl AnchorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorKind::Start => "Missing start anchor",
            AnchorKind::End => "Missing end anchor",
        }
    }
}

/// The source page does not have the shape the conversion expects.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AnchorError {
    pub kind: AnchorKind,
    /// The literal marker that was searched for
    pub anchor: String,
    pub message: String,
    /// Where the search started from, when known
    pub span: Option<Span>,
    pub span_label: Option<String>,
    pub help: Option<String>,
}

impl AnchorError {
    pub fn new(kind: AnchorKind, anchor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            anchor: anchor.into(),
            message: message.into(),
            span: None,
            span_label: None,
            help: None,
        }
    }

    /// Point the diagnostic at a span with a label (e.g., "fragment starts here")
    pub fn with_span(mut self, span: Span, label: impl Into<String>) -> Self {
        self.span = Some(span);
        self.span_label = Some(label.into());
        self
    }

    /// Add help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the error with source context
    pub fn render(&self, source: &str, filename: &str) -> String {
        self.render_inner(source, filename, false)
    }

    /// Render the error with ANSI color codes
    pub fn render_color(&self, source: &str, filename: &str) -> String {
        self.render_inner(source, filename, true)
    }

    fn render_inner(&self, source: &str, filename: &str, color: bool) -> String {
        let red = if color { "\x1b[1;31m" } else { "" };
        let dim = if color { "\x1b[2m" } else { "" };
        let cyan = if color { "\x1b[1;38;5;73m" } else { "" };
        let reset = if color { "\x1b[0m" } else { "" };

        let mut output = String::new();
        output.push('\n');

        let location = match &self.span {
            Some(span) => format!("{}:{}:{}", filename, span.start.line + 1, span.start.col + 1),
            None => filename.to_string(),
        };
        output.push_str(&format!(" {}file:{} {}\n", dim, reset, location));
        output.push_str(&format!("{}error:{} {}\n", red, reset, self.message));

        if let Some(span) = &self.span {
            if let Some(source_line) = source.lines().nth(span.start.line) {
                let line_number = span.start.line + 1;
                let width = line_number.to_string().len().max(2);

                output.push_str(&format!("{}{:>width$} |{}\n", dim, "", reset, width = width));
                output.push_str(&format!(
                    "{}{:>width$} |{} {}\n",
                    dim, line_number, reset, source_line,
                    width = width
                ));

                let line_chars = source_line.chars().count();
                let underline_len = if span.end.line == span.start.line {
                    span.end.col.saturating_sub(span.start.col).max(1)
                } else {
                    line_chars.saturating_sub(span.start.col).max(1)
                };
                let label = self.span_label.as_deref().unwrap_or("here");
                output.push_str(&format!(
                    "{}{:>width$} |{} {}{}{}{} {}\n",
                    dim, "", reset,
                    " ".repeat(span.start.col), red, "^".repeat(underline_len), reset,
                    label,
                    width = width
                ));
            }
        }

        if let Some(help) = &self.help {
            output.push('\n');
            let content = if color { highlight_code(help) } else { help.clone() };
            output.push_str(&format!(" {}help:{} {}\n", cyan, reset, content));
        }

        output.push('\n');
        output
    }
}

/// Error while converting a page (precondition or file access)
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Anchor(#[from] AnchorError),
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Render the error with source context (no color)
    pub fn render(&self, source: &str, filename: &str) -> String {
        match self {
            ConvertError::Anchor(err) => err.render(source, filename),
            other => format!("error: {}\n", other),
        }
    }

    /// Render the error with ANSI color codes
    pub fn render_color(&self, source: &str, filename: &str) -> String {
        match self {
            ConvertError::Anchor(err) => err.render_color(source, filename),
            other => format!("\x1b[1;31merror\x1b[0m: \x1b[1m{}\x1b[0m\n", other),
        }
    }
}

/// Color `backticked` code spans in prose (help text)
fn highlight_code(text: &str) -> String {
    const CODE: &str = "\x1b[38;5;180m";
    const RESET: &str = "\x1b[0m";

    let mut result = String::with_capacity(text.len() * 2);
    let mut in_code = false;
    for ch in text.chars() {
        if ch == '`' {
            if in_code {
                result.push('`');
                result.push_str(RESET);
            } else {
                result.push_str(CODE);
                result.push('`');
            }
            in_code = !in_code;
        } else {
            result.push(ch);
        }
    }
    if in_code {
        result.push_str(RESET);
    }
    result
}
