use std::fmt;

use crate::expr::Expr;
use crate::lit::LiteralValue;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Column(name) => write!(f, "col(\"{name}\")"),
            Columns(names) => write!(f, "cols({names:?})"),
            Literal(v) => write!(f, "{v:?}"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LiteralValue::*;
        match self {
            Null => f.write_str("null"),
            Boolean(v) => write!(f, "{v}"),
            Utf8(v) => write!(f, "{v:?}"),
            Int32(v) => write!(f, "{v}"),
            Int64(v) => write!(f, "{v}"),
            Float32(v) => write!(f, "{v}"),
            Float64(v) => write!(f, "{v}"),
            Series(s) => write!(f, "series[{}]", s.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::col;
    use crate::lit::{lit, LiteralValue};

    #[test]
    fn expressions_format_like_the_dsl_that_built_them() {
        assert_eq!(format!("{}", col("a")), "col(\"a\")");
        assert_eq!(format!("{:?}", lit(1i64)), "Int64(1)");
    }

    #[test]
    fn literal_display_renders_the_bare_value() {
        assert_eq!(LiteralValue::Float64(2.5).to_string(), "2.5");
        assert_eq!(LiteralValue::Utf8("x".to_owned()).to_string(), "\"x\"");
        assert_eq!(LiteralValue::Null.to_string(), "null");
    }
}
