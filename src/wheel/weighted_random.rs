use rand::Rng;

use super::catalog::RewardCatalog;

///
/// A source of uniform draws in [0, 1).
///
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Wraps any `rand` RNG as a [`UnitSource`].
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UnitSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

///
/// Maps a single uniform draw onto an index of `weights`.
///
/// Returns the first index whose cumulative weight is greater than `u * total`.
/// If rounding means nothing qualifies, the last index is returned. `weights`
/// must be non-empty.
///
fn pick_weighted_index<I>(weights: I, u: f64) -> usize
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let weights = weights.into_iter();
    let total: f64 = weights.clone().sum();
    let random = u * total;
    let mut cumulative = 0.0;
    let mut last = 0;
    for (index, weight) in weights.enumerate() {
        cumulative += weight;
        if random < cumulative {
            return index;
        }
        last = index;
    }
    last
}

pub fn weighted_random<S: UnitSource + ?Sized>(catalog: &RewardCatalog, source: &mut S) -> usize {
    pick_weighted_index(catalog.weights(), source.next_unit())
}
