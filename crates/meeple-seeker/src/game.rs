//! The board game record.

use crate::column::Column;
use crate::traits::{Named, Seekable};
use crate::value::Value;

/// An immutable board game catalog entry.
///
/// Records are compared by value. Construct with [`BoardGame::new`] and the
/// consuming `with_*` methods; there is no way to change a record afterwards.
///
/// # Example
///
/// ```
/// use meeple_seeker::BoardGame;
///
/// let chess = BoardGame::new("Chess", 7)
///     .with_players(2, 2)
///     .with_play_time(10, 20)
///     .with_rating(10.0)
///     .with_year(2006);
///
/// assert_eq!(chess.name(), "Chess");
/// assert_eq!(chess.max_players(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoardGame {
    name: String,
    id: i64,
    min_players: i64,
    max_players: i64,
    min_time: i64,
    max_time: i64,
    difficulty: f64,
    rank: i64,
    rating: f64,
    year: i64,
}

impl BoardGame {
    /// Creates a record with the given name and id; every other field is zero.
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        BoardGame {
            name: name.into(),
            id,
            min_players: 0,
            max_players: 0,
            min_time: 0,
            max_time: 0,
            difficulty: 0.0,
            rank: 0,
            rating: 0.0,
            year: 0,
        }
    }

    /// Sets the minimum and maximum player count.
    pub fn with_players(mut self, min: i64, max: i64) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Sets the minimum and maximum play time in minutes.
    pub fn with_play_time(mut self, min: i64, max: i64) -> Self {
        self.min_time = min;
        self.max_time = max;
        self
    }

    /// Sets the average weight, higher is harder.
    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the catalog rank.
    pub fn with_rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }

    /// Sets the average user rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the year of publication.
    pub fn with_year(mut self, year: i64) -> Self {
        self.year = year;
        self
    }

    /// Returns the game name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the catalog id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the minimum player count.
    pub fn min_players(&self) -> i64 {
        self.min_players
    }

    /// Returns the maximum player count.
    pub fn max_players(&self) -> i64 {
        self.max_players
    }

    /// Returns the minimum play time in minutes.
    pub fn min_time(&self) -> i64 {
        self.min_time
    }

    /// Returns the maximum play time in minutes.
    pub fn max_time(&self) -> i64 {
        self.max_time
    }

    /// Returns the average weight.
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Returns the catalog rank.
    pub fn rank(&self) -> i64 {
        self.rank
    }

    /// Returns the average user rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns the year of publication.
    pub fn year(&self) -> i64 {
        self.year
    }
}

impl Seekable for BoardGame {
    fn field_value(&self, column: Column) -> Value<'_> {
        match column {
            Column::Name => Value::Text(&self.name),
            Column::Id => Value::Integer(self.id),
            Column::MinPlayers => Value::Integer(self.min_players),
            Column::MaxPlayers => Value::Integer(self.max_players),
            Column::MinTime => Value::Integer(self.min_time),
            Column::MaxTime => Value::Integer(self.max_time),
            Column::Difficulty => Value::Real(self.difficulty),
            Column::Rank => Value::Integer(self.rank),
            Column::Rating => Value::Real(self.rating),
            Column::Year => Value::Integer(self.year),
        }
    }
}

impl Named for BoardGame {
    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for BoardGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
