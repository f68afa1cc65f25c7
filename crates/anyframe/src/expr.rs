use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lit::LiteralValue;

/// Backend-independent expression handle.
///
/// This is the conversion target for everything the API accepts as an
/// expression input: an existing `Expr`, a column name, a primitive literal
/// or a (type-erased) series. Evaluation belongs to the backends; an `Expr`
/// only says *what* was referenced, never computes anything.
#[derive(Clone, PartialEq)]
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Column(Arc<str>),
    Columns(Vec<String>),
    Literal(LiteralValue),
}

impl Expr {
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    /// The referenced column name, if this is a single-column expression.
    pub fn column_name(&self) -> Option<&str> {
        match self {
            Expr::Column(name) => Some(name),
            _ => None,
        }
    }
}

/// Create a Column expression from a column name.
pub fn col(name: &str) -> Expr {
    Expr::Column(Arc::from(name))
}

/// Create a Column expression referencing multiple columns.
pub fn cols<I, S>(names: I) -> Expr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Expr::Columns(names.into_iter().map(Into::into).collect())
}

/// Anything that can be converted into an [`Expr`]: an `Expr` itself, a
/// column name, a primitive literal or a series.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl<T: Into<Expr>> IntoExpr for T {
    fn into_expr(self) -> Expr {
        self.into()
    }
}
