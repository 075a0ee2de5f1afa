mod common;

use leafscan_core::detection::{
    apply_iqr_filter, iqr_bounds, rank_components, DetectionStats, NoiseFilter,
};
use leafscan_core::error::LeafscanError;

use common::{component_with_size, sizes};

// ---------------------------------------------------------------------------
// Threshold filter
// ---------------------------------------------------------------------------

#[test]
fn test_default_range() {
    let filter = NoiseFilter::default();
    assert_eq!(filter.min_size(), 10);
    assert_eq!(filter.max_size(), 50_000);
    assert!(!filter.iqr_enabled());
}

#[test]
fn test_threshold_bounds_are_inclusive() {
    let filter = NoiseFilter::default();
    assert!(!filter.accepts(5));
    assert!(filter.accepts(50));
    assert!(!filter.accepts(100_000));
    assert!(filter.accepts(10));
    assert!(filter.accepts(50_000));
    assert!(!filter.accepts(9));
    assert!(!filter.accepts(50_001));
}

#[test]
fn test_apply_threshold() {
    let filter = NoiseFilter::default();
    let mut components: Vec<_> = [5, 50, 100_000, 10, 50_000]
        .iter()
        .enumerate()
        .map(|(i, &s)| component_with_size(i, s))
        .collect();

    let removed = filter.apply_threshold(&mut components);
    assert_eq!(removed, 2);
    assert_eq!(sizes(&components), vec![50, 10, 50_000]);
}

#[test]
fn test_strict_constructor_rejects_bad_range() {
    assert!(matches!(
        NoiseFilter::new(100, 10),
        Err(LeafscanError::InvalidSizeRange { min: 100, max: 10 })
    ));
    assert!(NoiseFilter::new(0, 10).is_err());
    let filter = NoiseFilter::new(7, 7).unwrap();
    assert!(filter.accepts(7));
    assert!(!filter.accepts(6));
}

#[test]
fn test_setters_clamp() {
    let mut filter = NoiseFilter::default();

    filter.set_min_size(0);
    assert_eq!(filter.min_size(), 1);

    filter.set_max_size(0);
    assert_eq!(filter.max_size(), 1);

    filter.set_min_size(500);
    assert_eq!(filter.min_size(), 500);
    assert_eq!(filter.max_size(), 500);

    filter.set_max_size(2000);
    assert_eq!(filter.max_size(), 2000);

    filter.set_size_range(0, 0);
    assert_eq!((filter.min_size(), filter.max_size()), (1, 1));

    filter.set_size_range(30, 20);
    assert_eq!((filter.min_size(), filter.max_size()), (30, 30));
}

// ---------------------------------------------------------------------------
// IQR filter
// ---------------------------------------------------------------------------

#[test]
fn test_iqr_bounds_scenario() {
    let bounds = iqr_bounds(&[5, 20, 22, 25, 27, 30, 1000]).unwrap();
    assert_eq!(bounds.q1, 20.0);
    assert_eq!(bounds.q3, 30.0);
    assert_eq!(bounds.iqr, 10.0);
    assert_eq!(bounds.lower, 5.0);
    assert_eq!(bounds.upper, 45.0);
    assert!(bounds.contains(5));
    assert!(bounds.contains(45));
    assert!(!bounds.contains(46));
    assert!(!bounds.contains(4));
}

#[test]
fn test_iqr_bounds_sort_input() {
    let shuffled = iqr_bounds(&[1000, 25, 5, 30, 22, 27, 20]).unwrap();
    let sorted = iqr_bounds(&[5, 20, 22, 25, 27, 30, 1000]).unwrap();
    assert_eq!(shuffled, sorted);
}

#[test]
fn test_iqr_quartiles_use_truncated_index() {
    // n = 4: Q1 = sorted[1], Q3 = sorted[3], no interpolation.
    let bounds = iqr_bounds(&[10, 10, 10, 100]).unwrap();
    assert_eq!(bounds.q1, 10.0);
    assert_eq!(bounds.q3, 100.0);
    assert_eq!(bounds.upper, 235.0);
}

#[test]
fn test_iqr_removes_outlier_keeps_boundary() {
    let mut components: Vec<_> = [5, 20, 22, 25, 27, 30, 1000]
        .iter()
        .enumerate()
        .map(|(i, &s)| component_with_size(i, s))
        .collect();

    let removed = apply_iqr_filter(&mut components);
    assert_eq!(removed, 1);
    assert_eq!(sizes(&components), vec![5, 20, 22, 25, 27, 30]);
}

#[test]
fn test_iqr_noop_below_four_components() {
    assert!(iqr_bounds(&[1, 1000, 5000]).is_none());

    let mut components: Vec<_> = [1, 1000, 5000]
        .iter()
        .enumerate()
        .map(|(i, &s)| component_with_size(i, s))
        .collect();
    assert_eq!(apply_iqr_filter(&mut components), 0);
    assert_eq!(components.len(), 3);

    let mut empty = Vec::new();
    assert_eq!(apply_iqr_filter(&mut empty), 0);
}

#[test]
fn test_apply_runs_threshold_then_iqr() {
    let filter = NoiseFilter::new(10, 50_000).unwrap().with_iqr(true);
    let mut components: Vec<_> = [3, 20, 22, 25, 27, 30, 40, 1000, 60_000]
        .iter()
        .enumerate()
        .map(|(i, &s)| component_with_size(i, s))
        .collect();

    let report = filter.apply(&mut components);
    assert_eq!(report.removed_by_size, 2);
    assert_eq!(report.removed_as_outliers, 1);
    assert_eq!(sizes(&components), vec![20, 22, 25, 27, 30, 40]);
}

#[test]
fn test_apply_without_iqr_keeps_outliers() {
    let filter = NoiseFilter::new(1, 50_000).unwrap();
    let mut components: Vec<_> = [5, 20, 22, 25, 27, 30, 1000]
        .iter()
        .enumerate()
        .map(|(i, &s)| component_with_size(i, s))
        .collect();

    let report = filter.apply(&mut components);
    assert_eq!(report.removed_as_outliers, 0);
    assert_eq!(components.len(), 7);
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn test_rank_by_descending_size() {
    let mut components = vec![
        component_with_size(1, 100),
        component_with_size(2, 50),
        component_with_size(3, 200),
    ];
    assert!(components.iter().all(|c| c.rank().is_none()));

    rank_components(&mut components);

    assert_eq!(sizes(&components), vec![200, 100, 50]);
    let ranks: Vec<_> = components.iter().map(|c| c.rank()).collect();
    assert_eq!(ranks, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_rank_orders_different_sizes_only() {
    let mut components = vec![
        component_with_size(1, 7),
        component_with_size(2, 9),
        component_with_size(3, 7),
        component_with_size(4, 1),
    ];
    rank_components(&mut components);

    assert_eq!(components[0].size(), 9);
    assert_eq!(components[3].size(), 1);
    for pair in components.windows(2) {
        assert!(pair[0].size() >= pair[1].size());
        assert_eq!(pair[0].rank().unwrap() + 1, pair[1].rank().unwrap());
    }
}

#[test]
fn test_stats_summary() {
    let mut components = vec![
        component_with_size(1, 10),
        component_with_size(2, 25),
        component_with_size(3, 11),
    ];
    rank_components(&mut components);
    let stats = DetectionStats::summarize(100, 46, 43, 5, &components);

    assert_eq!(stats.component_count, 3);
    // 46 / 3 truncated.
    assert_eq!(stats.average_size, Some(15));
    assert_eq!(stats.largest_size, Some(25));
    assert_eq!(stats.smallest_size, Some(10));

    let text = stats.to_string();
    assert!(text.contains("Leaves detected:   3"), "got: {text}");
    assert!(text.contains("Largest size:      25"), "got: {text}");
}

#[test]
fn test_stats_summary_empty() {
    let stats = DetectionStats::summarize(100, 3, 1, 2, &[]);
    assert_eq!(stats.component_count, 0);
    assert_eq!(stats.average_size, None);
    assert_eq!(stats.largest_size, None);
    assert_eq!(stats.smallest_size, None);
    assert!(!stats.to_string().contains("Average"));
}
