//! # AnyFrame typing
//!
//! Typing primitives for a backend-agnostic DataFrame API. The crate defines
//! the shared vocabulary the compatibility layer is written against:
//!
//! * [`Expr`](expr::Expr) and [`IntoExpr`](expr::IntoExpr) — "anything usable
//!   as an expression input": an expression, a column name, a primitive
//!   literal or a series.
//! * [`Series<S>`](series::Series) and [`DataFrame<D>`](frame::DataFrame) —
//!   wrappers over caller-supplied native series/dataframe types, with no
//!   bounds on the native type.
//! * [`AnySeries`](series::AnySeries) — a series with its native type erased,
//!   so it can travel through an expression.
//!
//! Nothing here evaluates; backends own execution. The crate is the seam
//! between them.
//!
//! ```
//! use anyframe::prelude::*;
//!
//! fn sort_key(key: impl IntoExpr) -> Expr {
//!     key.into_expr()
//! }
//!
//! assert_eq!(sort_key("height"), col("height"));
//! assert!(sort_key(1.5).is_literal());
//! ```

pub mod datatypes;
pub mod error;
pub mod expr;
mod format;
pub mod frame;
mod from;
pub mod lit;
pub mod prelude;
pub mod series;

pub use crate::expr::{col, cols, Expr, IntoExpr};
pub use crate::lit::{lit, Literal, NULL};
