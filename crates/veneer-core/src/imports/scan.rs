//! Single-pass module scan for styling-library bindings.

use veneer_ast::{
    ArrowBody, Expr, ExprKind, ForInit, Module, PropertyKey, Stmt, StmtKind, VarDeclarator,
};

use super::declarations::read_import_decl;
use super::registry::ImportRegistry;
use super::requires::read_require_decl;
use crate::config::Config;

/// Scan one module and return its populated binding registry.
///
/// A single linear traversal: import declarations are classified at the top
/// level (the only place the module grammar allows them), variable
/// declarators at any nesting depth. The scan never fails; any shape it does
/// not recognize is skipped, and the worst outcome is a missed binding.
#[must_use]
pub fn scan_module(module: &Module, config: &Config) -> ImportRegistry {
    let mut registry = ImportRegistry::new();
    for stmt in &module.stmts {
        scan_stmt(stmt, config, &mut registry);
    }
    tracing::debug!(
        source_path = module.source_path.as_deref(),
        bindings = registry.len(),
        library_imported = registry.has_library_imports(),
        "scanned module"
    );
    registry
}

fn scan_stmt(stmt: &Stmt, config: &Config, registry: &mut ImportRegistry) {
    match &stmt.kind {
        StmtKind::Import(decl) => read_import_decl(decl, config, registry),
        StmtKind::Var { decls, .. } => scan_declarators(decls, config, registry),
        StmtKind::Expr(expr) => scan_expr(expr, config, registry),
        StmtKind::Block(stmts) => {
            for stmt in stmts {
                scan_stmt(stmt, config, registry);
            }
        }
        StmtKind::Function(function) => {
            for stmt in &function.body {
                scan_stmt(stmt, config, registry);
            }
        }
        StmtKind::If {
            test,
            consequent,
            alternate,
        } => {
            scan_expr(test, config, registry);
            scan_stmt(consequent, config, registry);
            if let Some(alternate) = alternate {
                scan_stmt(alternate, config, registry);
            }
        }
        StmtKind::While { test, body } => {
            scan_expr(test, config, registry);
            scan_stmt(body, config, registry);
        }
        StmtKind::For {
            init,
            test,
            update,
            body,
        } => {
            match init {
                Some(ForInit::Var { decls, .. }) => scan_declarators(decls, config, registry),
                Some(ForInit::Expr(expr)) => scan_expr(expr, config, registry),
                None => {}
            }
            if let Some(test) = test {
                scan_expr(test, config, registry);
            }
            if let Some(update) = update {
                scan_expr(update, config, registry);
            }
            scan_stmt(body, config, registry);
        }
        StmtKind::Return(expr) => {
            if let Some(expr) = expr {
                scan_expr(expr, config, registry);
            }
        }
        StmtKind::Try {
            block,
            handler,
            finalizer,
        } => {
            for stmt in block {
                scan_stmt(stmt, config, registry);
            }
            if let Some(handler) = handler {
                for stmt in &handler.body {
                    scan_stmt(stmt, config, registry);
                }
            }
            if let Some(finalizer) = finalizer {
                for stmt in finalizer {
                    scan_stmt(stmt, config, registry);
                }
            }
        }
        StmtKind::Empty => {}
    }
}

fn scan_declarators(decls: &[VarDeclarator], config: &Config, registry: &mut ImportRegistry) {
    for decl in decls {
        read_require_decl(decl, config, registry);
        // Initializers can close over further declarations, e.g. an arrow
        // function body requiring the library.
        if let Some(init) = &decl.init {
            scan_expr(init, config, registry);
        }
    }
}

fn scan_expr(expr: &Expr, config: &Config, registry: &mut ImportRegistry) {
    match &expr.kind {
        ExprKind::Arrow(arrow) => match &arrow.body {
            ArrowBody::Block(stmts) => {
                for stmt in stmts {
                    scan_stmt(stmt, config, registry);
                }
            }
            ArrowBody::Expr(body) => scan_expr(body, config, registry),
        },
        ExprKind::Call { callee, args } => {
            scan_expr(callee, config, registry);
            for arg in args {
                scan_expr(arg, config, registry);
            }
        }
        ExprKind::Member {
            object, property, ..
        } => {
            scan_expr(object, config, registry);
            scan_expr(property, config, registry);
        }
        ExprKind::Array(elements) => {
            for element in elements.iter().flatten() {
                scan_expr(element, config, registry);
            }
        }
        ExprKind::Object(properties) => {
            for prop in properties {
                if let PropertyKey::Computed(key) = &prop.key {
                    scan_expr(key, config, registry);
                }
                scan_expr(&prop.value, config, registry);
            }
        }
        ExprKind::Assign { left, right } => {
            scan_expr(left, config, registry);
            scan_expr(right, config, registry);
        }
        ExprKind::Null
        | ExprKind::Bool(_)
        | ExprKind::Number(_)
        | ExprKind::String(_)
        | ExprKind::Ident(_) => {}
    }
}
