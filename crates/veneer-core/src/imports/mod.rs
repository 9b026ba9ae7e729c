//! Styling-library import resolution.
//!
//! One scan per module classifies ES import declarations and CommonJS
//! require declarators into canonical library members, accumulating local
//! aliases in an [`ImportRegistry`] that later transform passes read.

mod canonical;
mod declarations;
mod registry;
mod requires;
mod scan;

pub use canonical::CanonicalApi;
pub use declarations::read_import_decl;
pub use registry::ImportRegistry;
pub use requires::read_require_decl;
pub use scan::scan_module;
