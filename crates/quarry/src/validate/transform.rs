use quarry_core::descriptor::DEFAULT;
use quarry_sql::stmt::Expr;

use std::fmt;

/// A named transform applied to a column: an aggregate, a scalar function, a
/// window function, or `distinct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Sum,
    Avg,
    Count,
    Max,
    Min,
    Concat,
    Substring,
    Lower,
    Upper,
    Trim,
    Length,
    Date,
    Year,
    Month,
    Day,
    Abs,
    Round,
    Floor,
    Ceiling,
    Coalesce,
    Nullif,
    Case,
    Cast,
    RowNumber,
    Rank,
    DenseRank,
    Lead,
    Lag,
    Distinct,
}

/// Where a transform may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Row-level function; allowed everywhere.
    Scalar,

    /// Aggregate; allowed in projections and orderings.
    Aggregate,

    /// Window function; projection only.
    Window,

    /// `DISTINCT`; first projected field only.
    Distinct,
}

const ALL: &[(&str, Transform)] = &[
    ("sum", Transform::Sum),
    ("avg", Transform::Avg),
    ("count", Transform::Count),
    ("max", Transform::Max),
    ("min", Transform::Min),
    ("concat", Transform::Concat),
    ("substring", Transform::Substring),
    ("lower", Transform::Lower),
    ("upper", Transform::Upper),
    ("trim", Transform::Trim),
    ("length", Transform::Length),
    ("date", Transform::Date),
    ("year", Transform::Year),
    ("month", Transform::Month),
    ("day", Transform::Day),
    ("abs", Transform::Abs),
    ("round", Transform::Round),
    ("floor", Transform::Floor),
    ("ceiling", Transform::Ceiling),
    ("coalesce", Transform::Coalesce),
    ("nullif", Transform::Nullif),
    ("case", Transform::Case),
    ("cast", Transform::Cast),
    ("row_number", Transform::RowNumber),
    ("rank", Transform::Rank),
    ("dense_rank", Transform::DenseRank),
    ("lead", Transform::Lead),
    ("lag", Transform::Lag),
    ("distinct", Transform::Distinct),
];

/// Longest prefix `substring` keeps.
const SUBSTRING_LEN: i64 = 32;

impl Transform {
    /// Looks up a transform by name. `"default"` means no transform.
    pub fn parse(name: &str) -> Result<Option<Transform>, String> {
        if name == DEFAULT {
            return Ok(None);
        }

        ALL.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, transform)| Some(*transform))
            .ok_or_else(|| format!("unsupported transform `{name}`"))
    }

    pub fn as_str(self) -> &'static str {
        ALL.iter()
            .find(|(_, transform)| *transform == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub fn kind(self) -> TransformKind {
        use Transform::*;

        match self {
            Sum | Avg | Count | Max | Min => TransformKind::Aggregate,
            RowNumber | Rank | DenseRank | Lead | Lag => TransformKind::Window,
            Distinct => TransformKind::Distinct,
            _ => TransformKind::Scalar,
        }
    }

    /// Wraps `expr` in this transform. `row_key` orders the rows of the
    /// offset window functions.
    pub fn apply(self, expr: Expr, row_key: Expr) -> Expr {
        use Transform::*;

        match self {
            Sum => Expr::func("SUM", [expr]),
            Avg => Expr::func("AVG", [expr]),
            Count => Expr::func("COUNT", [expr]),
            Max => Expr::func("MAX", [expr]),
            Min => Expr::func("MIN", [expr]),
            Concat => Expr::func("CONCAT", [text(expr)]),
            Substring => Expr::func(
                "SUBSTRING",
                [text(expr), Expr::integer(1), Expr::integer(SUBSTRING_LEN)],
            ),
            Lower => Expr::func("LOWER", [text(expr)]),
            Upper => Expr::func("UPPER", [text(expr)]),
            Trim => Expr::func("TRIM", [text(expr)]),
            Length => Expr::func("LENGTH", [text(expr)]),
            Date => Expr::cast(expr, "DATE"),
            Year => Expr::extract("YEAR", expr),
            Month => Expr::extract("MONTH", expr),
            Day => Expr::extract("DAY", expr),
            Abs => Expr::func("ABS", [expr]),
            Round => Expr::func("ROUND", [expr]),
            Floor => Expr::func("FLOOR", [expr]),
            Ceiling => Expr::func("CEILING", [expr]),
            Coalesce => Expr::func("COALESCE", [text(expr), Expr::text("")]),
            Nullif => Expr::func("NULLIF", [text(expr), Expr::text("")]),
            Case => Expr::case(Expr::is_null(expr), Expr::integer(0), Expr::integer(1)),
            Cast => text(expr),
            RowNumber => Expr::window("ROW_NUMBER", vec![], expr),
            Rank => Expr::window("RANK", vec![], expr),
            DenseRank => Expr::window("DENSE_RANK", vec![], expr),
            Lead => Expr::window("LEAD", vec![expr], row_key),
            Lag => Expr::window("LAG", vec![expr], row_key),
            Distinct => Expr::distinct(expr),
        }
    }
}

fn text(expr: Expr) -> Expr {
    Expr::cast(expr, "TEXT")
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for (name, transform) in ALL {
            assert_eq!(Transform::parse(name), Ok(Some(*transform)));
            assert_eq!(transform.as_str(), *name);
        }
    }

    #[test]
    fn default_means_none() {
        assert_eq!(Transform::parse("default"), Ok(None));
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["SUM", "median", "pg_sleep", ""] {
            assert!(Transform::parse(name).is_err(), "{name}");
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(Transform::Sum.kind(), TransformKind::Aggregate);
        assert_eq!(Transform::Lower.kind(), TransformKind::Scalar);
        assert_eq!(Transform::Lag.kind(), TransformKind::Window);
        assert_eq!(Transform::Distinct.kind(), TransformKind::Distinct);
    }
}
