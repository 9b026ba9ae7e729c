//! Classification of CommonJS require declarators.

use veneer_ast::{BindingKind, Expr, ExprKind, PropertyKey, VarDeclarator};

use super::canonical::CanonicalApi;
use super::registry::ImportRegistry;
use crate::config::Config;

/// Record the styling-library bindings introduced by one variable declarator
/// whose initializer is a `require(...)` call.
///
/// The gate is strict: the initializer must be a call whose callee is the
/// bare identifier `require` with exactly one string-literal argument naming
/// a recognized source. Anything else (wrong callee, extra arguments, a
/// computed specifier) is a no-op, not an error.
pub fn read_require_decl(
    declarator: &VarDeclarator,
    config: &Config,
    registry: &mut ImportRegistry,
) {
    let Some(source) = require_source(declarator.init.as_ref()) else {
        return;
    };
    if !config.recognizes_source(source) {
        return;
    }
    registry.record_import_path(source);

    match &declarator.binding.kind {
        BindingKind::Ident(local) => {
            registry.add_binding(CanonicalApi::WholeLibrary, local);
        }
        BindingKind::Object { properties } => {
            for prop in properties {
                // Only plain `key: alias` pairs participate. Rest elements,
                // defaults, computed or literal keys, and nested patterns are
                // skipped.
                if prop.rest || prop.default.is_some() {
                    continue;
                }
                let PropertyKey::Ident(key) = &prop.key else {
                    continue;
                };
                let BindingKind::Ident(local) = &prop.value.kind else {
                    continue;
                };
                if let Some(member) = CanonicalApi::from_member_name(key) {
                    registry.add_binding(member, local);
                }
            }
        }
        BindingKind::Array { .. } => {}
    }
}

/// The module specifier of `require("...")`, if the initializer is exactly
/// that shape.
fn require_source(init: Option<&Expr>) -> Option<&str> {
    let Some(Expr {
        kind: ExprKind::Call { callee, args },
        ..
    }) = init
    else {
        return None;
    };
    let ExprKind::Ident(callee_name) = &callee.kind else {
        return None;
    };
    if callee_name != "require" || args.len() != 1 {
        return None;
    }
    match &args[0].kind {
        ExprKind::String(value) => Some(value),
        _ => None,
    }
}
