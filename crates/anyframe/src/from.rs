use std::any::Any;

use crate::error::AnyframeError;
use crate::expr::{col, Expr};
use crate::lit::{lit, Literal, LiteralValue};
use crate::series::{AnySeries, Series};

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        col(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        col(&s)
    }
}

impl From<LiteralValue> for Expr {
    fn from(lv: LiteralValue) -> Self {
        Expr::Literal(lv)
    }
}

macro_rules! from_literals {
    ($type:ty) => {
        impl From<$type> for Expr {
            fn from(val: $type) -> Self {
                lit(val)
            }
        }
    };
}

from_literals!(bool);
from_literals!(i32);
from_literals!(i64);
from_literals!(f32);
from_literals!(f64);

impl<S: Any + Send + Sync> From<Series<S>> for Expr {
    fn from(s: Series<S>) -> Self {
        s.lit()
    }
}

impl From<AnySeries> for Expr {
    fn from(s: AnySeries) -> Self {
        s.lit()
    }
}

impl TryFrom<Expr> for LiteralValue {
    type Error = AnyframeError;

    fn try_from(expr: Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Literal(lv) => Ok(lv),
            e => Err(AnyframeError::ComputeError(
                format!("cannot convert expression {e:?} to a literal").into(),
            )),
        }
    }
}
