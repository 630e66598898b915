//! Stateless random draw. Committing the result lives on
//! [`Session::commit_draw`](super::Session::commit_draw).

use rand::RngExt;

/// Uniformly pick one element, or `None` for an empty pool.
pub fn draw_random<'a, T, R: RngExt>(pool: &'a [T], rng: &mut R) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.random_range(0..pool.len()))
}
