//! Syntax knowledge for the line kinds the normalizer cares about.
//!
//! Each kind owns its delimiters and matching logic so the pass code never
//! inspects markers directly.

pub mod block_quote;
pub mod code_fence;
pub mod emphasis;
pub mod heading;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use emphasis::BoldLine;
pub use heading::Heading;
pub use list_marker::{ListKind, ListMarker, OrderedItem, UnorderedItem};
