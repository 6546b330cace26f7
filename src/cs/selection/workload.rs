//! Reproducible inputs for exercising the selector, and a brute-force check of its answers.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform values in `0..max`.
    Random { max: i64 },
    /// Only ten distinct values (`0, 100, ..., 900`), shuffled.
    ManyDuplicates,
    /// `1..=n` in order.
    Ascending,
    /// `n..=1` in order.
    Descending,
    /// Two separated clusters, `1..=n/2` and `1000..`, shuffled together.
    Bimodal,
}

impl Distribution {
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Random { .. } => "random",
            Distribution::ManyDuplicates => "many duplicates",
            Distribution::Ascending => "ascending",
            Distribution::Descending => "descending",
            Distribution::Bimodal => "bimodal",
        }
    }
}

pub fn generate(dist: Distribution, n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    match dist {
        Distribution::Random { max } => (0..n).map(|_| rng.gen_range(0..max.max(1))).collect(),
        Distribution::ManyDuplicates => {
            let mut v: Vec<i64> = (0..n).map(|i| (i % 10) as i64 * 100).collect();
            v.shuffle(&mut rng);
            v
        }
        Distribution::Ascending => (1..=n as i64).collect(),
        Distribution::Descending => (1..=n as i64).rev().collect(),
        Distribution::Bimodal => {
            let half = n / 2;
            let mut v: Vec<i64> = (0..n)
                .map(|i| {
                    if i < half {
                        i as i64 + 1
                    } else {
                        (i - half) as i64 + 1000
                    }
                })
                .collect();
            v.shuffle(&mut rng);
            v
        }
    }
}

/// Both ends, their neighbours and the quartiles.
pub fn probe_ranks(n: usize) -> Vec<usize> {
    let mut ranks: Vec<usize> = [1, 2, n / 4, n / 2, 3 * n / 4, n.saturating_sub(1), n]
        .into_iter()
        .filter(|&k| k >= 1 && k <= n)
        .collect();
    ranks.sort_unstable();
    ranks.dedup();
    ranks
}

pub fn verify_kth<T: Ord + Clone>(seq: &[T], k: usize, candidate: &T) -> bool {
    if k == 0 || k > seq.len() {
        return false;
    }
    let mut sorted = seq.to_vec();
    sorted.sort();
    sorted[k - 1] == *candidate
}
