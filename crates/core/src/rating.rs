//! Rating scale and vote aggregation.
//!
//! Ratings are held as whole tenths ([`Score`]) so that sums and means are
//! exact. A movie's aggregate (`vote_count`, `vote_average`) is a pure
//! function of its current rating set. The store calls [`aggregate`] after
//! every rating insert, update or delete so the pair is always exact.

use serde::{Serialize, Serializer};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted rating value (inclusive).
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating value (inclusive).
pub const MAX_RATING: f64 = 10.0;

const TENTHS_PER_POINT: i32 = 10;
const MAX_RATING_TENTHS: i32 = 100;

// Slack for decimal inputs such as 2.3 whose binary value is not exact.
const DECIMAL_EPSILON: f64 = 1e-6;

/* --------------------------------------------------------------------------
Score
-------------------------------------------------------------------------- */

/// A validated rating, stored as a whole number of tenths (`7.5` is `75`).
///
/// Serializes as its decimal value so JSON clients see `7.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i32);

impl Score {
    /// Parse a client-supplied rating.
    ///
    /// Rejects non-finite values, values outside the scale and values with
    /// more than one decimal place.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(CoreError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let scaled = value * f64::from(TENTHS_PER_POINT);
        let tenths = scaled.round();
        if (scaled - tenths).abs() > DECIMAL_EPSILON {
            return Err(CoreError::Validation(
                "rating must have at most one decimal place".into(),
            ));
        }

        Self::from_tenths(tenths as i32)
    }

    pub fn from_tenths(tenths: i32) -> Result<Self, CoreError> {
        if !(0..=MAX_RATING_TENTHS).contains(&tenths) {
            return Err(CoreError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(Self(tenths))
    }

    pub fn tenths(self) -> i32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / f64::from(TENTHS_PER_POINT)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/* --------------------------------------------------------------------------
Aggregation
-------------------------------------------------------------------------- */

/// Derived vote statistics for a single movie.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VoteAggregate {
    pub vote_count: i64,
    /// Mean rating rounded to one decimal, `0.0` when there are no votes.
    pub vote_average: f32,
}

/// Integer mean `sum / count`, rounded half away from zero.
///
/// `count` must be positive.
pub fn rounded_mean(sum: i64, count: i64) -> i64 {
    let magnitude = (2 * sum.abs() + count) / (2 * count);
    magnitude * sum.signum()
}

/// Compute the aggregate for a set of ratings.
///
/// The mean is a plain arithmetic average with no weighting, computed over
/// tenths so no precision is lost before rounding.
pub fn aggregate<I>(ratings: I) -> VoteAggregate
where
    I: IntoIterator<Item = Score>,
{
    let (count, sum) = ratings
        .into_iter()
        .fold((0i64, 0i64), |(n, s), r| (n + 1, s + i64::from(r.tenths())));

    if count == 0 {
        return VoteAggregate::default();
    }

    let mean_tenths = rounded_mean(sum, count);
    VoteAggregate {
        vote_count: count,
        vote_average: mean_tenths as f32 / TENTHS_PER_POINT as f32,
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
