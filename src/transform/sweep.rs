use super::{ConversionMetadata, Pass};
use lazy_static::lazy_static;
use regex::Regex;

/// Rule name the sweep reports under
pub const SWEEP_RULE: &str = "sweep";

lazy_static! {
    // `<?php ... ?>` and `<?= ... ?>`, openers in any case; an opener without `?>` runs to the end, as in PHP
    static ref DIRECTIVE_SPAN: Regex =
        Regex::new(r"(?si)<\?(?:php|=).*?(?:\?>|\z)").expect("directive span pattern");
}

/// Deletes every directive the earlier passes did not turn into a placeholder.
///
/// The computed value of a swept directive is lost; each one is logged and
/// listed in [`ConversionMetadata::swept`].
pub struct SweepPass {
    rule: &'static str,
}

impl SweepPass {
    /// Sweep reporting its count under `rule`
    pub fn named(rule: &'static str) -> Self {
        Self { rule }
    }
}

impl Default for SweepPass {
    fn default() -> Self {
        Self::named(SWEEP_RULE)
    }
}

impl Pass for SweepPass {
    fn apply(&self, fragment: String, metadata: &mut ConversionMetadata) -> String {
        let mut fragment = fragment;
        let mut count = 0;

        // Deleting a span can join the text around it into a new opener
        while DIRECTIVE_SPAN.is_match(&fragment) {
            for span in DIRECTIVE_SPAN.find_iter(&fragment) {
                tracing::warn!(directive = span.as_str(), "Discarded directive with no placeholder");
                metadata.swept.push(span.as_str().to_string());
                count += 1;
            }
            fragment = DIRECTIVE_SPAN.replace_all(&fragment, "").into_owned();
        }

        metadata.record(self.rule, count);
        fragment
    }
}
