//! Filter expression parser.
//!
//! Grammar:
//!
//! ```text
//! expression := clause (',' clause)*
//! clause     := column-alias operator-token value-text
//! ```
//!
//! Parsing is lenient. A clause with no operator, a bad split or an unknown
//! column is dropped with a warning, and the remaining clauses still apply.

use log::{debug, warn};

use crate::clause::Clause;
use crate::column::Column;
use crate::op::Op;

/// Parses a comma-separated filter expression into clauses.
///
/// Never fails. An empty expression, or one where every clause was dropped,
/// yields an empty list, which filters nothing out.
///
/// # Example
///
/// ```
/// use meeple_seeker::{parse_expression, Column, Op};
///
/// let clauses = parse_expression("minPlayers >= 2, name ~= go, colour == red");
/// assert_eq!(clauses.len(), 2);
/// assert_eq!(clauses[0].column, Column::MinPlayers);
/// assert_eq!(clauses[0].op, Op::Gte);
/// assert_eq!(clauses[1].value, "go");
/// ```
pub fn parse_expression(expression: &str) -> Vec<Clause> {
    expression
        .split(',')
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .filter_map(parse_clause)
        .collect()
}

/// Parses a single `column operator value` clause.
pub fn parse_clause(raw: &str) -> Option<Clause> {
    let raw = raw.trim();

    let Some((op, token)) = Op::find_in(raw) else {
        warn!("dropping clause {raw:?}: no operator");
        return None;
    };

    let parts: Vec<&str> = raw.split(token).map(str::trim).collect();
    let [left, value] = parts.as_slice() else {
        warn!("dropping clause {raw:?}: expected one '{token}'");
        return None;
    };
    if left.is_empty() || value.is_empty() {
        warn!("dropping clause {raw:?}: missing column or value");
        return None;
    }

    let Some(column) = Column::resolve(left) else {
        warn!("dropping clause {raw:?}: unknown column {left:?}");
        return None;
    };

    let clause = Clause::new(column, op, *value);
    debug!("parsed clause: {clause}");
    Some(clause)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_clause() {
        let clauses = parse_expression("name == Go");
        assert_eq!(clauses, vec![Clause::new(Column::Name, Op::Eq, "Go")]);
    }

    #[test]
    fn whitespace_is_insignificant() {
        let clauses = parse_expression("  minPlayers>2 ,maxPlayers   <=   5  ");
        assert_eq!(
            clauses,
            vec![
                Clause::new(Column::MinPlayers, Op::Gt, "2"),
                Clause::new(Column::MaxPlayers, Op::Lte, "5"),
            ]
        );
    }

    #[test]
    fn value_keeps_inner_spaces() {
        let clause = parse_clause("name == Go Fish").unwrap();
        assert_eq!(clause.value, "Go Fish");
    }

    #[test]
    fn longest_token_wins() {
        assert_eq!(parse_clause("year>=2000").unwrap().op, Op::Gte);
        assert_eq!(parse_clause("year=>2000").unwrap().op, Op::Gte);
        assert_eq!(parse_clause("year<=2000").unwrap().op, Op::Lte);
        assert_eq!(parse_clause("name==Go").unwrap().op, Op::Eq);
        assert_eq!(parse_clause("name=Go").unwrap().op, Op::Eq);
        assert_eq!(parse_clause("name!=Go").unwrap().op, Op::Ne);
        assert_eq!(parse_clause("name~=Go").unwrap().op, Op::Contains);
    }

    #[test]
    fn column_aliases_are_case_insensitive() {
        assert_eq!(
            parse_clause("maxplayTime <= 50").unwrap().column,
            Column::MaxTime
        );
        assert_eq!(
            parse_clause("YEARPUBLISHED == 2002").unwrap().column,
            Column::Year
        );
    }

    #[test]
    fn malformed_clauses_are_dropped() {
        assert!(parse_clause("name Go").is_none());
        assert!(parse_clause("== Go").is_none());
        assert!(parse_clause("name ==").is_none());
        assert!(parse_clause("name == Go == Chess").is_none());
        assert!(parse_clause("colour == red").is_none());
    }

    #[test]
    fn empty_expression_is_identity() {
        assert!(parse_expression("").is_empty());
        assert!(parse_expression("  ,  , ").is_empty());
        assert!(parse_expression("nonsense").is_empty());
    }

    #[test]
    fn survivors_keep_their_order() {
        let clauses = parse_expression("rating > 7, bogus, year < 2005, name ~= go");
        let columns: Vec<Column> = clauses.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec![Column::Rating, Column::Year, Column::Name]);
    }

    #[test]
    fn values_are_not_coerced() {
        let clause = parse_clause("year == soon").unwrap();
        assert_eq!(clause.column, Column::Year);
        assert_eq!(clause.value, "soon");
    }
}
