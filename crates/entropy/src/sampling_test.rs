use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::Stream;
use crate::sampling::*;

#[test]
fn uniform_respects_bounds() {
    let mut rng = Stream::seeded(1_u64);
    for _ in 0..1000 {
        let x = sample_uniform(&mut rng, -3.0, 5.0);
        assert!((-3.0..5.0).contains(&x));
    }
}

#[test]
fn gaussian_moments() {
    let mut rng = Stream::seeded(2_u64);
    let n = 20_000;
    let samples: Vec<f64> = (0..n).map(|_| sample_gaussian(&mut rng, 3.0, 2.0)).collect();
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert_relative_eq!(mean, 3.0, epsilon = 0.1);
    assert_relative_eq!(var.sqrt(), 2.0, epsilon = 0.1);
    assert!(samples.iter().all(|x| x.is_finite()));
}

#[test]
fn gaussian_consumes_two_draws() {
    let mut rng = Stream::seeded(3_u64);
    sample_gaussian(&mut rng, 0.0, 1.0);
    assert_eq!(rng.words_consumed(), 4);
}

#[test]
fn log_normal_is_positive() {
    let mut rng = Stream::seeded(4_u64);
    for _ in 0..1000 {
        assert!(sample_log_normal(&mut rng, 0.0, 1.5) > 0.0);
    }
}

#[test]
fn log_uniform_respects_bounds() {
    let mut rng = Stream::seeded(5_u64);
    for _ in 0..1000 {
        let x = sample_log_uniform(&mut rng, 1e-9, 1e-6);
        assert!((1e-9..=1e-6).contains(&x));
    }
}

#[test]
fn geometric_mean_matches_parameter() {
    let mut rng = Stream::seeded(6_u64);
    let p = 0.25;
    let n = 20_000;
    let total: usize = (0..n).map(|_| sample_geometric(&mut rng, p)).sum();
    let mean = total as f64 / n as f64;

    // E[failures before success] = (1 - p) / p = 3
    assert_relative_eq!(mean, 3.0, epsilon = 0.15);
}

#[test]
fn geometric_with_certain_success_is_zero_but_still_draws() {
    let mut rng = Stream::seeded(7_u64);
    assert_eq!(sample_geometric(&mut rng, 1.0), 0);
    assert_eq!(rng.words_consumed(), 2);
}

#[test]
fn categorical_follows_weights() {
    let mut rng = Stream::seeded(8_u64);
    let weights = [0.7, 0.25, 0.05];
    let mut counts = [0usize; 3];
    for _ in 0..10_000 {
        counts[sample_categorical(&mut rng, &weights)] += 1;
    }

    assert!(counts[0] > counts[1]);
    assert!(counts[1] > counts[2]);
    assert!(counts[2] > 0, "rare bucket never sampled");
}

#[test]
fn categorical_skips_zero_weights() {
    let mut rng = Stream::seeded(9_u64);
    for _ in 0..1000 {
        assert_eq!(sample_categorical(&mut rng, &[0.0, 1.0, 0.0]), 1);
    }
}

#[test]
fn bernoulli_always_draws() {
    let mut rng = Stream::seeded(10_u64);
    assert!(!sample_bernoulli(&mut rng, 0.0));
    assert!(sample_bernoulli(&mut rng, 1.0));
    assert_eq!(rng.words_consumed(), 4);
}

#[test]
fn angle_is_in_degrees() {
    let mut rng = Stream::seeded(11_u64);
    for _ in 0..1000 {
        let angle = sample_angle_degrees(&mut rng);
        assert!((0.0..360.0).contains(&angle));
    }
}

#[test]
fn unit_vectors_are_normalized() {
    let mut rng = Stream::seeded(12_u64);
    for _ in 0..1000 {
        let v = sample_unit_vector(&mut rng);
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn direction_respects_inclination_band() {
    let mut rng = Stream::seeded(13_u64);
    let max_inclination = 20.0_f64.to_radians();
    for _ in 0..2000 {
        let v = sample_direction(&mut rng, max_inclination);
        let elevation = v.y.asin();
        assert!(elevation.abs() <= max_inclination + 1e-12);
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn flat_direction_stays_in_plane() {
    let mut rng = Stream::seeded(14_u64);
    for _ in 0..100 {
        let v = sample_direction(&mut rng, 0.0);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn full_sphere_covers_both_hemispheres() {
    let mut rng = Stream::seeded(15_u64);
    let ys: Vec<f64> = (0..2000).map(|_| sample_direction(&mut rng, PI / 2.0).y).collect();
    assert!(ys.iter().any(|y| *y > 0.9));
    assert!(ys.iter().any(|y| *y < -0.9));
}

#[test]
fn gaussian_vector_spread() {
    let mut rng = Stream::seeded(16_u64);
    let n = 5000;
    let mean_sq: f64 = (0..n)
        .map(|_| sample_gaussian_vector(&mut rng, 10.0).x.powi(2))
        .sum::<f64>()
        / n as f64;
    assert_relative_eq!(mean_sq.sqrt(), 10.0, epsilon = 0.5);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = Stream::seeded(17_u64);
    let mut items: Vec<usize> = (0..50).collect();
    shuffle(&mut rng, &mut items);

    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    assert_ne!(items, (0..50).collect::<Vec<_>>());
}

#[test]
fn ordered_subset_is_sorted_and_distinct() {
    let mut rng = Stream::seeded(18_u64);
    for _ in 0..200 {
        let subset = choose_ordered_subset(&mut rng, 10, 4);
        assert_eq!(subset.len(), 4);
        assert!(subset.windows(2).all(|w| w[0] < w[1]));
        assert!(subset.iter().all(|&i| i < 10));
    }
}

#[test]
fn ordered_subset_takes_everything_without_drawing() {
    let mut rng = Stream::seeded(19_u64);
    assert_eq!(choose_ordered_subset(&mut rng, 3, 5), vec![0, 1, 2]);
    assert_eq!(rng.words_consumed(), 0);
}
