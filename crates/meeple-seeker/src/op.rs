//! Comparison operators for filter clauses.
//!
//! The [`Op`] enum defines the supported comparison operators together with
//! the literal tokens that name them in an expression.

use std::cmp::Ordering;

use once_cell::sync::Lazy;

/// Comparison operator for a filter clause.
///
/// `Contains` only applies to text columns; the ordering operators apply to
/// every column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal. Case-insensitive for text.
    Eq,
    /// Not equal. Case-insensitive for text.
    Ne,
    /// Case-insensitive substring match. Text only.
    Contains,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
}

// Longest tokens first; at equal length, `Op::ALL` order decides.
static TOKENS: Lazy<Vec<(&'static str, Op)>> = Lazy::new(|| {
    let mut tokens: Vec<(&'static str, Op)> = Op::ALL
        .iter()
        .flat_map(|op| op.tokens().iter().map(move |token| (*token, *op)))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    tokens
});

impl Op {
    /// Every operator, in matching priority order.
    pub const ALL: [Op; 7] = [
        Op::Eq,
        Op::Ne,
        Op::Contains,
        Op::Gte,
        Op::Lte,
        Op::Gt,
        Op::Lt,
    ];

    /// Returns the literal tokens for this operator, primary token first.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Op::Eq => &["==", "="],
            Op::Ne => &["!="],
            Op::Contains => &["~="],
            Op::Gte => &[">=", "=>"],
            Op::Lte => &["<=", "=<"],
            Op::Gt => &[">"],
            Op::Lt => &["<"],
        }
    }

    /// Returns the primary token.
    pub fn token(self) -> &'static str {
        self.tokens()[0]
    }

    /// Finds the operator named in a clause.
    ///
    /// Tokens are tried longest first so that `>=` wins over `>` and `==`
    /// over `=`. Returns the operator and the token that matched.
    pub fn find_in(clause: &str) -> Option<(Op, &'static str)> {
        TOKENS
            .iter()
            .find(|(token, _)| clause.contains(token))
            .map(|(token, op)| (*op, *token))
    }

    /// Returns `true` if this operator is valid for numeric comparisons.
    pub fn is_number_op(self) -> bool {
        !matches!(self, Op::Contains)
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// `Contains` is not ordering-based and always evaluates to `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
