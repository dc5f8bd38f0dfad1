//! Tree engine: flat pre-order annotation, forest assembly, and
//! per-viewer visibility filtering.

pub mod assemble;
pub mod flatten;
pub mod visibility;

pub use assemble::assemble;
pub use flatten::flatten;
pub use visibility::VisibilityRules;
