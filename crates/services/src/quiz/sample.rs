use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Draws up to `n` questions from `pool` without bias or repeats.
///
/// The pool is copied, shuffled in place (Fisher–Yates) and truncated, so
/// every ordered subset of length `min(n, pool.len())` is equally likely
/// and the caller's pool is left untouched. An empty pool yields an empty
/// draw; a short pool is used as-is, with no padding or repetition.
#[must_use]
pub fn draw_with_rng<R: Rng + ?Sized>(pool: &[Question], n: usize, rng: &mut R) -> Vec<Question> {
    let mut picked = pool.to_vec();
    picked.as_mut_slice().shuffle(rng);
    picked.truncate(n);
    picked
}

/// [`draw_with_rng`] using the thread-local generator.
#[must_use]
pub fn draw(pool: &[Question], n: usize) -> Vec<Question> {
    draw_with_rng(pool, n, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(len: usize) -> Vec<Question> {
        (0..len)
            .map(|i| {
                Question::new(
                    format!("Q{i}?"),
                    vec!["A".to_owned(), "B".to_owned()],
                    "A",
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn draw_len_is_min_of_pool_and_request() {
        let pool = pool(7);
        assert_eq!(draw(&pool, 5).len(), 5);
        assert_eq!(draw(&pool, 7).len(), 7);
        assert_eq!(draw(&pool, 10).len(), 7);
        assert_eq!(draw(&pool, 0).len(), 0);
    }

    #[test]
    fn draw_from_empty_pool_is_empty() {
        assert!(draw(&[], 10).is_empty());
    }

    #[test]
    fn draw_returns_distinct_members_of_the_pool() {
        let pool = pool(20);
        let picked = draw(&pool, 10);

        let prompts: HashSet<&str> = picked.iter().map(Question::prompt).collect();
        assert_eq!(prompts.len(), picked.len());
        for question in &picked {
            assert!(pool.contains(question));
        }
    }

    #[test]
    fn draw_leaves_the_pool_untouched() {
        let pool = pool(5);
        let before = pool.clone();
        let _ = draw(&pool, 3);
        assert_eq!(pool, before);
    }

    #[test]
    fn draw_is_deterministic_under_a_seeded_rng() {
        let pool = pool(10);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            draw_with_rng(&pool, 10, &mut a),
            draw_with_rng(&pool, 10, &mut b)
        );
    }

    // Statistical, not exact: 20 independent shuffles of 10 elements all
    // landing on the same ordering has probability (1/10!)^19.
    #[test]
    fn repeated_draws_produce_different_orderings() {
        let pool = pool(10);
        let orderings: HashSet<Vec<String>> = (0..20)
            .map(|_| {
                draw(&pool, 10)
                    .iter()
                    .map(|q| q.prompt().to_owned())
                    .collect()
            })
            .collect();
        assert!(orderings.len() > 1);
    }
}
