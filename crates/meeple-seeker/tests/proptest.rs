//! Property-based tests for the planner and selection resolver.

use meeple_seeker::{parse_clause, resolve_selection, BoardGame, Column, GameList, Op, Planner};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

// Strategy to generate games with unique ids so value equality never merges two
fn catalog_strategy() -> impl Strategy<Value = Vec<BoardGame>> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,8}",
            1i64..8,
            0i64..6,
            0.0f64..10.0,
            1990i64..2025,
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (name, min_players, extra, rating, year))| {
                BoardGame::new(name, id as i64)
                    .with_players(min_players, min_players + extra)
                    .with_rating(rating)
                    .with_year(year)
            })
            .collect()
    })
}

fn numeric_column() -> impl Strategy<Value = Column> {
    prop::sample::select(vec![
        Column::MinPlayers,
        Column::MaxPlayers,
        Column::Year,
        Column::Rating,
    ])
}

fn comparison() -> impl Strategy<Value = Op> {
    prop::sample::select(vec![Op::Eq, Op::Ne, Op::Gt, Op::Lt, Op::Gte, Op::Lte])
}

fn expression() -> impl Strategy<Value = String> {
    (numeric_column(), comparison(), 0i64..2025)
        .prop_map(|(column, op, value)| format!("{} {} {}", column, op, value))
}

fn sorted_ids(games: &[BoardGame]) -> Vec<i64> {
    let mut ids: Vec<i64> = games.iter().map(BoardGame::id).collect();
    ids.sort_unstable();
    ids
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filtering never grows the view.
    #[test]
    fn filter_never_grows_view(catalog in catalog_strategy(), expr in expression()) {
        let mut planner = Planner::new(catalog.clone());
        let len = planner.filter(&expr).len();
        prop_assert!(len <= catalog.len());
    }

    /// Every survivor satisfies the clause it was filtered by.
    #[test]
    fn survivors_satisfy_clause(catalog in catalog_strategy(), expr in expression()) {
        let clause = parse_clause(&expr).unwrap();
        let mut planner = Planner::new(catalog);
        for game in planner.filter(&expr) {
            prop_assert!(clause.matches(game));
        }
    }

    /// A second filter only narrows the first.
    #[test]
    fn successive_filters_narrow(
        catalog in catalog_strategy(),
        first in expression(),
        second in expression(),
    ) {
        let mut alone = Planner::new(catalog.clone());
        let first_ids = sorted_ids(alone.filter(&first));

        let mut chained = Planner::new(catalog);
        chained.filter(&first);
        let chained_ids = sorted_ids(chained.filter(&second));

        for id in chained_ids {
            prop_assert!(first_ids.contains(&id));
        }
    }

    /// Reset followed by an empty filter yields the whole catalog.
    #[test]
    fn reset_restores_catalog(
        catalog in catalog_strategy(),
        exprs in prop::collection::vec(expression(), 0..4),
    ) {
        let mut planner = Planner::new(catalog.clone());
        for expr in &exprs {
            planner.filter_sorted_dir(expr, Column::Rating, false);
        }
        planner.reset();
        let view = planner.filter_sorted_dir("", Column::Name, true);
        prop_assert_eq!(sorted_ids(view), sorted_ids(&catalog));
    }

    /// Numeric sorts are ordered in the requested direction.
    #[test]
    fn sort_orders_numeric_column(catalog in catalog_strategy(), ascending in any::<bool>()) {
        let mut planner = Planner::new(catalog);
        let years: Vec<i64> = planner
            .filter_sorted_dir("", Column::Year, ascending)
            .iter()
            .map(BoardGame::year)
            .collect();
        for pair in years.windows(2) {
            if ascending {
                prop_assert!(pair[0] <= pair[1]);
            } else {
                prop_assert!(pair[0] >= pair[1]);
            }
        }
    }

    /// An index token resolves to exactly that element.
    #[test]
    fn index_round_trip(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!catalog.is_empty());
        let i = pick.index(catalog.len());
        let picked = resolve_selection(&(i + 1).to_string(), &catalog).unwrap();
        prop_assert_eq!(picked, vec![&catalog[i]]);
    }

    /// A range token resolves to exactly that inclusive slice, in order.
    #[test]
    fn range_is_inclusive(
        catalog in catalog_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!catalog.is_empty());
        let (x, y) = (a.index(catalog.len()), b.index(catalog.len()));
        let (start, end) = (x.min(y), x.max(y));
        let token = format!("{}-{}", start + 1, end + 1);
        let picked = resolve_selection(&token, &catalog).unwrap();
        let expected: Vec<&BoardGame> = catalog[start..=end].iter().collect();
        prop_assert_eq!(picked, expected);
    }

    /// Indexes past the end always fail.
    #[test]
    fn index_past_end_fails(catalog in catalog_strategy(), extra in 1usize..100) {
        let token = (catalog.len() + extra).to_string();
        prop_assert!(resolve_selection(&token, &catalog).is_err());
    }

    /// Adding everything then removing everything leaves an empty list.
    #[test]
    fn add_all_remove_all_is_empty(catalog in catalog_strategy()) {
        let mut list = GameList::new();
        list.add("all", &catalog).unwrap();
        prop_assert_eq!(list.count(), catalog.len());
        list.remove("all").unwrap();
        prop_assert_eq!(list.count(), 0);
    }

    /// Adding the same token twice never creates duplicates.
    #[test]
    fn add_is_idempotent(catalog in catalog_strategy()) {
        let mut list = GameList::new();
        list.add("all", &catalog).unwrap();
        let added = list.add("all", &catalog).unwrap();
        prop_assert_eq!(added, 0);
        prop_assert_eq!(list.count(), catalog.len());
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_catalog_filters_to_empty() {
    let mut planner = Planner::new(Vec::new());
    assert!(planner.filter("year > 2000").is_empty());
    assert!(planner.filter_sorted_dir("", Column::Name, false).is_empty());
    planner.reset();
    assert!(planner.is_empty());
}

#[test]
fn range_on_empty_catalog_fails() {
    let games: Vec<BoardGame> = Vec::new();
    assert!(resolve_selection("1-1", &games).is_err());
}
