mod directives;
mod metadata;
mod paths;
mod sweep;

pub use directives::{DirectivePass, DirectiveRule, Matcher, Placeholder, DIRECTIVE_RULES};
pub use metadata::{ConversionMetadata, RuleHit};
pub use paths::{PathRewrite, PathRewritePass, PATH_REWRITES};
pub use sweep::{SweepPass, SWEEP_RULE};

/// A rewrite stage over the fragment.
///
/// Each pass takes the fragment by value and returns the rewritten text.
pub trait Pass {
    fn apply(&self, fragment: String, metadata: &mut ConversionMetadata) -> String;
}

/// Transformer that applies a series of passes to the fragment
pub struct Transformer {
    passes: Vec<Box<dyn Pass>>,
}

impl Transformer {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn add<P: Pass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn transform(&self, fragment: String, metadata: &mut ConversionMetadata) -> String {
        self.passes
            .iter()
            .fold(fragment, |fragment, pass| pass.apply(fragment, metadata))
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a transformer with the standard passes: path rewrites, known
/// directives, then the sweep for anything left over.
pub fn standard_passes() -> Transformer {
    Transformer::new()
        .add(PathRewritePass)
        .add(DirectivePass)
        .add(SweepPass::default())
}
