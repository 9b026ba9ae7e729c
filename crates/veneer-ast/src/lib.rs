//! veneer-ast: module AST consumed by the veneer styling compiler.
//!
//! veneer's analysis passes run after parsing. The host pipeline parses each
//! source file and hands the passes one of these trees; nothing in this
//! crate reads source text.
//!
//! # Design Principles
//!
//! 1. **Everything is an Expression, Binding, or Statement**
//!    - Expressions: `require("mod")`, `a.b`, `{create: styles}`
//!    - Bindings: `a`, `[a, b]`, `{create: c}`
//!    - Statements: `import * as css from "mod";`, `const a = require("mod");`
//!
//! 2. **Subset, not superset**
//!    - Only the module-grammar shapes the analysis passes classify are
//!      modeled. Parsers covering the full grammar lower anything else to
//!      the nearest shape here (or to `StmtKind::Empty`).

mod ast;
mod span;

pub use ast::*;
pub use span::Span;
