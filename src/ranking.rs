use std::cmp::Ordering;

use crate::entities::movie;

/// Sorts ascending by rating and assigns dense ranks: the highest-rated
/// movie gets `count`, the lowest gets 1. Unrated movies order before any
/// rated one, matching SQLite's null-first ascending sort. The sort is
/// stable, so equal ratings keep their incoming order.
pub fn rank(movies: &mut [movie::Model]) {
    movies.sort_by(|a, b| compare_ratings(a.rating, b.rating));
    let count = movies.len() as i32;
    for (i, movie) in movies.iter_mut().enumerate() {
        movie.ranking = Some(count - i as i32);
    }
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
