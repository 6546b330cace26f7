use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cs::selection::{
    generate, linear_select, select_kth, Distribution, PivotStrategy, Selector,
};

const STRATEGIES: [PivotStrategy; 2] = [PivotStrategy::NestedMedians, PivotStrategy::SelectedMedian];

fn random_vec(rng: &mut ChaCha8Rng, n: usize, max: i32) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..max)).collect()
}

fn sorted_copy<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut s = v.to_vec();
    s.sort();
    s
}

#[test]
fn test_matches_sort_on_random_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for strategy in STRATEGIES {
        let selector = Selector::new(strategy);
        for _ in 0..200 {
            let n = rng.gen_range(1..300);
            let data = random_vec(&mut rng, n, 1000);
            let k = rng.gen_range(1..=n);
            let expected = sorted_copy(&data)[k - 1];
            assert_eq!(selector.select_kth(&mut data.clone(), k), Ok(expected));
        }
    }
}

#[test]
fn test_every_rank_reproduces_sort() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for strategy in STRATEGIES {
        let selector = Selector::new(strategy);
        for n in [1, 2, 5, 6, 7, 24, 25, 26, 101] {
            let data = random_vec(&mut rng, n, 40);
            let ranked: Vec<i32> = (1..=n)
                .map(|k| selector.select_kth(&mut data.clone(), k).unwrap())
                .collect();
            assert_eq!(ranked, sorted_copy(&data), "n={} {:?}", n, strategy);
        }
    }
}

#[test]
fn test_permutation_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for strategy in STRATEGIES {
        let data = random_vec(&mut rng, 997, 100);
        let mut work = data.clone();
        Selector::new(strategy).select_kth(&mut work, 400).unwrap();
        assert_eq!(sorted_copy(&work), sorted_copy(&data));
    }
}

#[test]
fn test_subrange_selection_keeps_outside_elements() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let data = random_vec(&mut rng, 120, 1000);
    let (left, right) = (13, 97);
    for k in [1, 10, 42, 85] {
        let mut work = data.clone();
        let expected = sorted_copy(&data[left..=right])[k - 1];
        assert_eq!(linear_select(&mut work, left, right, k), Ok(expected));
        assert_eq!(work[..left], data[..left]);
        assert_eq!(work[right + 1..], data[right + 1..]);
        assert_eq!(sorted_copy(&work[left..=right]), sorted_copy(&data[left..=right]));
    }
}

#[test]
fn test_duplicate_runs() {
    for strategy in STRATEGIES {
        let selector = Selector::new(strategy);
        let data = generate(Distribution::ManyDuplicates, 1000, 99999);
        // Each of the ten values fills a run of 100 ranks.
        for k in [1, 100, 101, 150, 500, 501, 999, 1000] {
            let expected = ((k as i64 - 1) / 100) * 100;
            assert_eq!(selector.select_kth(&mut data.clone(), k), Ok(expected));
        }
    }
}

#[test]
fn test_few_distinct_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    for _ in 0..50 {
        let n = rng.gen_range(6..200);
        let data = random_vec(&mut rng, n, 3);
        let sorted = sorted_copy(&data);
        for k in [1, n / 2 + 1, n] {
            assert_eq!(select_kth(&mut data.clone(), k), Ok(sorted[k - 1]));
        }
    }
}

#[test]
fn test_boundaries() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let data = random_vec(&mut rng, 333, 10_000);
    let min = *data.iter().min().unwrap();
    let max = *data.iter().max().unwrap();
    assert_eq!(select_kth(&mut data.clone(), 1), Ok(min));
    assert_eq!(select_kth(&mut data.clone(), data.len()), Ok(max));
    assert_eq!(select_kth(&mut vec![-7], 1), Ok(-7));
}

#[test]
fn test_structured_distributions() {
    for dist in [
        Distribution::Ascending,
        Distribution::Descending,
        Distribution::Bimodal,
    ] {
        let data = generate(dist, 5000, 88888);
        let sorted = sorted_copy(&data);
        for k in [1, 2, 1250, 2500, 3750, 4999, 5000] {
            for strategy in STRATEGIES {
                let got = Selector::new(strategy).select_kth(&mut data.clone(), k);
                assert_eq!(got, Ok(sorted[k - 1]), "{} k={}", dist.name(), k);
            }
        }
    }
}

#[test]
fn test_adversarial_large_input() {
    // Sawtooth of sorted runs, a classic bad case for first-element pivots.
    let data: Vec<u32> = (0..100_000u32).map(|i| (i % 5_000) * 20 + i / 5_000).collect();
    let sorted = sorted_copy(&data);
    for k in [1, 33_333, 50_000, 100_000] {
        assert_eq!(select_kth(&mut data.clone(), k), Ok(sorted[k - 1]));
    }
}
