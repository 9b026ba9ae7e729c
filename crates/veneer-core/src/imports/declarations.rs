//! Classification of ES import declarations.

use veneer_ast::{ImportDecl, ImportSpecifier, ImportedName};

use super::canonical::CanonicalApi;
use super::registry::ImportRegistry;
use crate::config::Config;

/// Record the styling-library bindings introduced by one import declaration.
///
/// Type-only imports (`import type` / `import typeof`) and declarations from
/// unrecognized sources leave the registry untouched. Unknown member names
/// from a recognized source are silently ignored: the library may export
/// members this pass does not track.
pub fn read_import_decl(decl: &ImportDecl, config: &Config, registry: &mut ImportRegistry) {
    if decl.kind.is_type_only() {
        return;
    }
    if !config.recognizes_source(&decl.source) {
        return;
    }
    registry.record_import_path(&decl.source);

    for specifier in &decl.specifiers {
        match specifier {
            // Default and namespace imports alias the whole library, never an
            // individual member.
            ImportSpecifier::Default { local, .. } | ImportSpecifier::Namespace { local, .. } => {
                registry.add_binding(CanonicalApi::WholeLibrary, local);
            }
            ImportSpecifier::Named {
                imported, local, ..
            } => {
                // Identifier-form and string-literal-form imported names
                // resolve through the same table.
                let name = match imported {
                    ImportedName::Ident(name) | ImportedName::String(name) => name,
                };
                if let Some(member) = CanonicalApi::from_member_name(name) {
                    registry.add_binding(member, local);
                }
            }
        }
    }
}
