//! veneer-core: analysis passes for the veneer styling compiler.
//!
//! The entry point is [`scan_module`]: one pass over a parsed module that
//! resolves every local name the module bound to the styling library,
//! however the import was spelled: aliased named imports, namespace and
//! default imports, and destructured or whole-module requires.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod imports;

pub use config::{Config, DEFAULT_IMPORT_SOURCES};
pub use error::Error;
pub use imports::{
    read_import_decl, read_require_decl, scan_module, CanonicalApi, ImportRegistry,
};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
