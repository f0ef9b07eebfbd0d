use common::titles::normalize;
use strsim::sorensen_dice;

use crate::models::ApiGame;

/// Minimum Sørensen–Dice similarity between the normalized hint and a
/// candidate's normalized title before the candidate counts as the game the
/// user meant. Applied uniformly to every search result.
pub const MIN_TITLE_SIMILARITY: f64 = 0.5;

/// Similarity of two raw titles after normalization.
pub fn title_similarity(left: &str, right: &str) -> f64 {
    sorensen_dice(&normalize(left), &normalize(right))
}

/// Pick the search hit whose title best matches the (already normalized)
/// hint. First occurrence wins on equal scores; below-threshold hits lose.
pub(crate) fn best_match(normalized_hint: &str, candidates: Vec<ApiGame>) -> Option<ApiGame> {
    let mut best: Option<(f64, ApiGame)> = None;

    for candidate in candidates {
        let score = sorensen_dice(normalized_hint, &normalize(&candidate.title));

        match &best {
            Some((best_score, _)) if *best_score >= score => {}
            _ => best = Some((score, candidate)),
        }
    }

    match best {
        Some((score, game)) if score >= MIN_TITLE_SIMILARITY => Some(game),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, title: &str) -> ApiGame {
        ApiGame {
            id: id.into(),
            title: title.into(),
        }
    }

    #[test]
    fn identical_titles_score_one() {
        assert_eq!(title_similarity("Halo Infinite", "halo  infinite!"), 1.0);
    }

    #[test]
    fn picks_the_closest_candidate() {
        let candidates = vec![
            hit("a", "Cyberpunk 2077: Phantom Liberty"),
            hit("b", "Cyberpunk 2077"),
            hit("c", "Shadowrun Returns"),
        ];

        let best = best_match("cyberpunk 2077", candidates).unwrap();
        assert_eq!(best.id, "b");
    }

    #[test]
    fn rejects_everything_below_threshold() {
        let candidates = vec![hit("a", "Completely Unrelated Farming Sim")];

        assert!(best_match("cyberpunk 2077", candidates).is_none());
        assert!(best_match("cyberpunk 2077", Vec::new()).is_none());
    }

    #[test]
    fn first_candidate_wins_ties() {
        let candidates = vec![hit("first", "Portal 2"), hit("second", "Portal 2")];

        let best = best_match("portal 2", candidates).unwrap();
        assert_eq!(best.id, "first");
    }
}
