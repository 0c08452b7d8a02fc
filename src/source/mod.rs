//! Reading the legacy page: locating the fragment and lifting out its inline style.

mod extract;
mod positions;
mod style;

pub use extract::{extract_fragment, Anchors};
pub use positions::{Position, Span};
pub use style::{relocate_style, Relocated};
