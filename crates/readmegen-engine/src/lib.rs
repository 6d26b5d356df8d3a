pub mod io;
pub mod normalize;
pub mod render;
pub mod warning;

// Re-export key types for easier usage
pub use io::{IoError, convert_one, default_out_path, discover_inputs, load_doc, render_from_path};
pub use normalize::normalize;
pub use render::{GradesSummary, ReadmeDoc, render_readme};
pub use warning::{set_warning, strip_warning};
