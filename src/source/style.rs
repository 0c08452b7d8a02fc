use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Consumes the newline before and after the block so no blank-line artifact is left behind
    static ref INLINE_STYLE: Regex =
        Regex::new(r"(?s)\n\s*<style>\s*(.*?)\s*</style>\s*\n").expect("inline style pattern");
}

/// Fragment with its first inline style block lifted out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocated {
    pub fragment: String,
    /// Trimmed CSS with one trailing newline, or empty when the fragment had no block
    pub style: String,
}

/// Move the first `<style>` block out of the fragment.
///
/// Only the first block is relocated; any later ones stay in the markup.
pub fn relocate_style(fragment: &str) -> Relocated {
    let Some(caps) = INLINE_STYLE.captures(fragment) else {
        return Relocated {
            fragment: fragment.to_string(),
            style: String::new(),
        };
    };

    let whole = caps.get(0).map_or(0..0, |m| m.range());
    let css = caps.get(1).map_or("", |m| m.as_str()).trim();

    let mut body = String::with_capacity(fragment.len());
    body.push_str(&fragment[..whole.start]);
    body.push_str("\n\n");
    body.push_str(&fragment[whole.end..]);

    tracing::info!(css_bytes = css.len(), "Relocated inline style block");
    Relocated {
        fragment: body,
        style: format!("{css}\n"),
    }
}
