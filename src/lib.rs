//! Ports the standalone PHP chat admin page into an Inertia Vue page.
//!
//! The conversion is a straight pipeline over text: slice the fragment out
//! between two anchors, lift its inline `<style>` block, rewrite relative
//! links, turn the known PHP echoes into placeholders the component fills in
//! after mount, sweep whatever PHP is left, then assemble the single-file
//! component.

pub mod error;
pub mod generate;
pub mod source;
pub mod transform;

pub use error::{AnchorError, AnchorKind, ConvertError};
pub use generate::GenerateOptions;
pub use source::Anchors;
pub use transform::ConversionMetadata;

use serde::Serialize;
use source::{Relocated, extract_fragment, relocate_style};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use transform::{Pass, SweepPass};

/// Legacy page read when no input is given
pub const DEFAULT_INPUT: &str = "chat/index.php";

/// Component written when no output is given
pub const DEFAULT_OUTPUT: &str = "backend-laravel/resources/js/Pages/Chat/Index.vue";

/// Rule name for directives swept out of the relocated style block
pub const STYLE_SWEEP_RULE: &str = "style-sweep";

/// Configuration for conversion.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Markers bounding the fragment to port
    pub anchors: Anchors,
    pub generate: GenerateOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub code: String,
    pub metadata: ConversionMetadata,
}

/// Convert a legacy page into component source.
///
/// Fails only when an anchor is missing; every other shortfall (no style
/// block, directives that match nothing) yields a complete component.
pub fn convert(source: &str, options: &Options) -> Result<Conversion, AnchorError> {
    let fragment = extract_fragment(source, &options.anchors)?;

    let mut metadata = ConversionMetadata::new();
    metadata.fragment_bytes = fragment.len();

    let Relocated { fragment, style } = relocate_style(fragment);
    metadata.style_relocated = !style.is_empty();

    let fragment = transform::standard_passes().transform(fragment, &mut metadata);
    let style = SweepPass::named(STYLE_SWEEP_RULE).apply(style, &mut metadata);

    if metadata.lost_directives() {
        tracing::warn!(count = metadata.swept.len(), "Some directives were removed without a placeholder");
    }

    let code = generate::assemble(&fragment, &style, &options.generate);
    Ok(Conversion { code, metadata })
}

/// Read a legacy page as UTF-8
pub fn read_source(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a legacy page from a stream; `name` stands in for the path in errors
pub fn read_stream(mut reader: impl Read, name: &str) -> Result<String, ConvertError> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|source| ConvertError::Read {
            path: PathBuf::from(name),
            source,
        })?;
    Ok(source)
}

/// Convert `source` and write the component to `output`, overwriting it.
///
/// Nothing is written unless the conversion succeeds.
pub fn port(source: &str, output: &Path, options: &Options) -> Result<Conversion, ConvertError> {
    let conversion = convert(source, options).inspect_err(|err| {
        tracing::debug!(kind = err.kind.as_str(), anchor = %err.anchor, "Conversion aborted");
    })?;
    write_component(output, &conversion.code)?;
    Ok(conversion)
}

fn write_component(path: &Path, code: &str) -> Result<(), ConvertError> {
    let write_err = |source| ConvertError::Write {
        path: PathBuf::from(path),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, code).map_err(write_err)?;
    tracing::debug!(path = %path.display(), bytes = code.len(), "Wrote component");
    Ok(())
}
