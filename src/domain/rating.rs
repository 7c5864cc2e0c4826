//! Anonymous running-mean ratings.

use crate::domain::{entities::Recipe, error::DomainError};

/// A single star vote in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote(u8);

impl Vote {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Vote {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "rating must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }
}

/// Fold one vote into the recipe's mean. Individual votes are not retained.
pub fn submit_rating(recipe: &mut Recipe, vote: Vote) {
    let count = f64::from(recipe.ratings_count);
    let updated_count = recipe.ratings_count.saturating_add(1);
    recipe.rating = (recipe.rating * count + f64::from(vote.value())) / f64::from(updated_count);
    recipe.ratings_count = updated_count;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipes::sample_recipes;

    fn unrated() -> Recipe {
        let mut recipe = sample_recipes("1").remove(0);
        recipe.rating = 0.0;
        recipe.ratings_count = 0;
        recipe
    }

    #[test]
    fn first_vote_becomes_the_rating() {
        let mut recipe = unrated();
        submit_rating(&mut recipe, Vote::try_from(5).expect("vote"));
        assert_eq!(recipe.rating, 5.0);
        assert_eq!(recipe.ratings_count, 1);
    }

    #[test]
    fn vote_updates_running_mean() {
        let mut recipe = unrated();
        recipe.rating = 4.0;
        recipe.ratings_count = 2;
        submit_rating(&mut recipe, Vote::try_from(5).expect("vote"));
        assert!((recipe.rating - 13.0 / 3.0).abs() < 1e-9);
        assert_eq!(recipe.ratings_count, 3);
    }

    #[test]
    fn out_of_range_votes_are_rejected() {
        assert!(Vote::try_from(0).is_err());
        assert!(Vote::try_from(6).is_err());
        assert_eq!(Vote::try_from(3).map(Vote::value), Ok(3));
    }
}
