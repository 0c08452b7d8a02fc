use super::Span;
use crate::error::{AnchorError, AnchorKind};

/// Opening tag of the notification sound element; the fragment begins here.
pub const START_ANCHOR: &str = "<audio id=\"notif-sound\"";

/// First script tag after the markup; the fragment ends before it.
pub const END_ANCHOR: &str = "<script";

/// Literal markers bounding the fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    pub start: String,
    pub end: String,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            start: START_ANCHOR.to_string(),
            end: END_ANCHOR.to_string(),
        }
    }
}

impl Anchors {
    fn missing_start(&self) -> String {
        if self.start == START_ANCHOR {
            "cannot find notif-sound audio tag".to_string()
        } else {
            format!("cannot find start anchor `{}`", self.start)
        }
    }

    fn missing_end(&self) -> String {
        if self.end == END_ANCHOR {
            "cannot find trailing script tag".to_string()
        } else {
            format!("cannot find end anchor `{}`", self.end)
        }
    }
}

/// Slice out the fragment from the start anchor (inclusive) up to the first
/// end anchor at or after it (exclusive), with trailing whitespace trimmed.
pub fn extract_fragment<'a>(source: &'a str, anchors: &Anchors) -> Result<&'a str, AnchorError> {
    let start = source.find(&anchors.start).ok_or_else(|| {
        AnchorError::new(AnchorKind::Start, &anchors.start, anchors.missing_start())
            .with_help(format!("the page must contain `{}`", anchors.start))
    })?;

    let end = source[start..]
        .find(&anchors.end)
        .map(|offset| start + offset)
        .ok_or_else(|| {
            AnchorError::new(AnchorKind::End, &anchors.end, anchors.missing_end())
                .with_span(Span::of(source, start, anchors.start.len()), "fragment starts here")
                .with_help(format!("a `{}` tag must follow the fragment", anchors.end))
        })?;

    let fragment = source[start..end].trim_end();
    tracing::debug!(start, end, bytes = fragment.len(), "Extracted fragment");
    Ok(fragment)
}
