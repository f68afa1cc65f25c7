pub use crate::datatypes::DataType;
pub use crate::error::{AnyframeError, AnyframeResult, ErrString};
pub use crate::expr::{col, cols, Expr, IntoExpr};
pub use crate::frame::DataFrame;
pub use crate::lit::{lit, Literal, LiteralValue, Null, NULL};
pub use crate::series::{AnySeries, Series};
