//! Quiz Question Selection
//!
//! Picks one uniformly-random question the player has not seen yet, or
//! reports the quiz as exhausted. Exhaustion is a terminal success, not an
//! error: the client ends the quiz when no question comes back.

use crate::models::Question;
use rand::seq::SliceRandom;

/// Sentinel category id meaning "no category filter"
pub const ALL_CATEGORIES: i64 = 0;

/// Pick a random question from `candidates` whose id is not in `previous`
///
/// Returns `None` when the quiz is exhausted. The exhaustion check compares
/// counts (`previous.len() == candidates.len()`), not set equality - this
/// is the behavior clients depend on, including the empty-empty case where
/// `0 == 0` ends the quiz immediately. If the counts differ but every
/// candidate has already been seen (stale ids from another category in
/// `previous`), the draw comes up empty and the quiz also ends.
pub fn pick_unseen<'a>(previous: &[i64], candidates: &'a [Question]) -> Option<&'a Question> {
    if previous.len() == candidates.len() {
        return None;
    }

    let remaining: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    remaining.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("question {}", id),
            answer: format!("answer {}", id),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn test_picked_question_is_unseen() {
        let candidates: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        let previous = vec![1, 2];

        // random draw, so check the membership property over many rounds
        for _ in 0..100 {
            let picked = pick_unseen(&previous, &candidates).expect("questions remain");
            assert!(!previous.contains(&picked.id));
            assert!(candidates.iter().any(|q| q.id == picked.id));
        }
    }

    #[test]
    fn test_single_remaining_question_is_deterministic() {
        let candidates: Vec<Question> = (1..=3).map(|id| question(id, 1)).collect();
        let previous = vec![1, 3];

        let picked = pick_unseen(&previous, &candidates).expect("one question left");
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn test_exhausted_when_counts_match() {
        let candidates: Vec<Question> = (1..=3).map(|id| question(id, 1)).collect();
        let previous = vec![1, 2, 3];

        assert!(pick_unseen(&previous, &candidates).is_none());
    }

    #[test]
    fn test_empty_empty_is_exhausted() {
        // 0 == 0 ends the quiz immediately; this is success, not an error
        assert!(pick_unseen(&[], &[]).is_none());
    }

    #[test]
    fn test_stale_previous_ids_end_quiz_instead_of_faulting() {
        // previous ids from another category: counts differ, nothing unseen
        let candidates = vec![question(1, 1)];
        let previous = vec![1, 99];

        assert!(pick_unseen(&previous, &candidates).is_none());
    }
}
