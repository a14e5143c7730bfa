//! Per-book rating aggregation for catalog placeholders.
//!
//! # Design
//! - Aggregates are derived per request and never stored.
//! - No reviews, a failed request, or a rejected payload all hide the placeholder.

use readingtrail_api_models::ReviewRecord;

/// Stars rendered per placeholder.
pub const MAX_STARS: u8 = 5;

/// Selector for rating placeholders.
pub const PLACEHOLDER_SELECTOR: &str = ".rating-display[data-book-id]";

/// Mean of a non-empty set of ratings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewAggregate {
    /// Number of reviews.
    pub count: usize,
    /// Arithmetic mean of the ratings.
    pub average: f64,
}

impl ReviewAggregate {
    /// Aggregate raw ratings; `None` when there are none.
    #[must_use]
    pub fn from_ratings(ratings: &[f64]) -> Option<Self> {
        if ratings.is_empty() {
            return None;
        }
        let total: f64 = ratings.iter().sum();
        let count = u32::try_from(ratings.len()).unwrap_or(u32::MAX);
        Some(Self {
            count: ratings.len(),
            average: total / f64::from(count),
        })
    }

    /// Aggregate review rows.
    #[must_use]
    pub fn from_reviews(reviews: &[ReviewRecord]) -> Option<Self> {
        let ratings: Vec<f64> = reviews.iter().map(|review| review.rating).collect();
        Self::from_ratings(&ratings)
    }

    /// Average rounded to one decimal.
    #[must_use]
    pub fn display_rounded(&self) -> f64 {
        (self.average * 10.0).round() / 10.0
    }

    /// Filled stars: the average rounded to the nearest integer, within `0..=max`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars_shown(&self, max: u8) -> u8 {
        self.average.round().clamp(0.0, f64::from(max)) as u8
    }

    /// Text summary, for example `4.3 (3)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} ({})", self.display_rounded(), self.count)
    }
}

/// Filled flags for each star slot, in order.
#[must_use]
pub fn star_glyphs(filled: u8, max: u8) -> Vec<bool> {
    (1..=max).map(|slot| slot <= filled).collect()
}

/// What a placeholder should show once its request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RatingView {
    /// Hide the placeholder.
    Hidden,
    /// Reveal the placeholder with stars and summary text.
    Shown {
        /// Filled flags per star slot.
        stars: Vec<bool>,
        /// Summary text.
        text: String,
    },
}

impl RatingView {
    /// Decide the view from the settled review list (`None` for any failure).
    #[must_use]
    pub fn from_reviews(reviews: Option<&[ReviewRecord]>) -> Self {
        reviews
            .and_then(ReviewAggregate::from_reviews)
            .map_or(Self::Hidden, |aggregate| Self::Shown {
                stars: star_glyphs(aggregate.stars_shown(MAX_STARS), MAX_STARS),
                text: aggregate.summary(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: f64) -> ReviewRecord {
        ReviewRecord { rating, id: None }
    }

    #[test]
    fn aggregate_of_five_four_four() {
        let aggregate = ReviewAggregate::from_ratings(&[5.0, 4.0, 4.0]).expect("non-empty");
        assert!((aggregate.average - 13.0 / 3.0).abs() < 1e-9);
        assert!((aggregate.display_rounded() - 4.3).abs() < 1e-9);
        assert_eq!(aggregate.stars_shown(MAX_STARS), 4);
        assert_eq!(aggregate.summary(), "4.3 (3)");
    }

    #[test]
    fn empty_ratings_have_no_aggregate() {
        assert!(ReviewAggregate::from_ratings(&[]).is_none());
        assert_eq!(RatingView::from_reviews(Some(&[][..])), RatingView::Hidden);
    }

    #[test]
    fn failures_hide_the_placeholder() {
        assert_eq!(RatingView::from_reviews(None), RatingView::Hidden);
    }

    #[test]
    fn half_values_round_up() {
        let aggregate = ReviewAggregate::from_ratings(&[4.0, 5.0]).expect("non-empty");
        assert_eq!(aggregate.stars_shown(MAX_STARS), 5);
        assert_eq!(aggregate.summary(), "4.5 (2)");
    }

    #[test]
    fn whole_averages_print_without_decimals() {
        let aggregate = ReviewAggregate::from_ratings(&[4.0]).expect("non-empty");
        assert_eq!(aggregate.summary(), "4 (1)");
    }

    #[test]
    fn shown_view_renders_filled_and_empty_stars() {
        let reviews = [review(5.0), review(4.0), review(4.0)];
        let view = RatingView::from_reviews(Some(&reviews[..]));
        assert_eq!(
            view,
            RatingView::Shown {
                stars: vec![true, true, true, true, false],
                text: "4.3 (3)".to_string(),
            }
        );
    }

    #[test]
    fn stars_clamp_to_max() {
        let aggregate = ReviewAggregate::from_ratings(&[9.0]).expect("non-empty");
        assert_eq!(aggregate.stars_shown(MAX_STARS), MAX_STARS);
        assert_eq!(star_glyphs(0, 3), vec![false, false, false]);
    }
}
