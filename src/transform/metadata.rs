use serde::Serialize;

/// How many times one rewrite rule fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

/// Metadata collected during conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionMetadata {
    /// Size of the extracted fragment, before any rewriting
    pub fragment_bytes: usize,
    pub style_relocated: bool,
    /// Every rule in application order, including ones that matched nothing
    pub rules: Vec<RuleHit>,
    /// Directive spans deleted by the sweep, in document order
    pub swept: Vec<String>,
}

impl ConversionMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rule: &str, count: usize) {
        tracing::debug!(rule, count, "Applied rule");
        self.rules.push(RuleHit {
            rule: rule.to_string(),
            count,
        });
    }

    pub fn count(&self, rule: &str) -> usize {
        self.rules
            .iter()
            .filter(|hit| hit.rule == rule)
            .map(|hit| hit.count)
            .sum()
    }

    /// Whether any directive value was dropped instead of becoming a placeholder
    pub fn lost_directives(&self) -> bool {
        !self.swept.is_empty()
    }
}
