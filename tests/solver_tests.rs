//! End-to-end solver tests
//!
//! Both solvers against realistic Lapland deliveries and the edge cases
//! around trip flushing and capacity.

mod fixtures;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fixtures::{LAPLAND_TOWNS, gifts_at, sample_gifts};
use gift_planner::anneal::{AnnealOptions, Annealer};
use gift_planner::config::PlannerConfig;
use gift_planner::gift::{Gift, total_weight};
use gift_planner::greedy;
use gift_planner::ingest;
use gift_planner::report::SolveReport;
use gift_planner::solver::{anneal_solve, greedy_solve, plan};
use gift_planner::traits::DistanceMetric;
use gift_planner::trip::{DEFAULT_CAPACITY, DEFAULT_DEPOT, DeliveryProblem};

// ============================================================================
// Helper Functions
// ============================================================================

fn round_trip(gift: &Gift) -> f64 {
    let problem = DeliveryProblem::default();
    2.0 * problem.metric.distance(DEFAULT_DEPOT, (gift.latitude, gift.longitude))
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_gifts_at_depot_cost_nothing() {
    let (lat, lng) = DEFAULT_DEPOT;
    let gifts = vec![
        Gift::new(1, lat, lng, 1_000),
        Gift::new(2, lat, lng, 2_000),
        Gift::new(3, lat, lng, 3_000),
    ];

    assert_eq!(greedy_solve(&gifts, DEFAULT_CAPACITY), 0.0);
    assert_eq!(anneal_solve(&gifts, DEFAULT_CAPACITY, 1000.0, 0.003, &mut rng(1)).unwrap(), 0.0);
}

#[test]
fn test_gifts_over_half_capacity_travel_alone() {
    let a = Gift::new(1, 66.5039, 25.7294, 6_000_000);
    let b = Gift::new(2, 68.6586, 27.5411, 7_000_000);
    let gifts = vec![a.clone(), b.clone()];
    let expected = round_trip(&a) + round_trip(&b);

    let greedy = greedy_solve(&gifts, DEFAULT_CAPACITY);
    let annealed = anneal_solve(&gifts, DEFAULT_CAPACITY, 1000.0, 0.003, &mut rng(2)).unwrap();

    assert!((greedy - expected).abs() < 1e-9, "greedy {} != {}", greedy, expected);
    assert!((annealed - expected).abs() < 1e-9, "annealing {} != {}", annealed, expected);
}

#[test]
fn test_single_trip_is_still_charged() {
    let gifts = gifts_at(&LAPLAND_TOWNS[..4], &[1_000]);
    assert!(total_weight(&gifts) < DEFAULT_CAPACITY);

    let problem = DeliveryProblem::default();
    assert_eq!(problem.partition(&gifts).len(), 1);
    assert!(problem.trip_cost(&gifts) > 0.0);
    assert!(greedy_solve(&gifts, DEFAULT_CAPACITY) > 0.0);
    assert!(anneal_solve(&gifts, DEFAULT_CAPACITY, 1000.0, 0.003, &mut rng(3)).unwrap() > 0.0);
}

#[test]
fn test_single_gift_is_a_doubled_depot_leg() {
    let gift = Gift::new(1, 66.5039, 25.7294, 500);
    let expected = round_trip(&gift);

    assert_eq!(DeliveryProblem::default().trip_cost(std::slice::from_ref(&gift)), expected);
    assert!((greedy_solve(&[gift], DEFAULT_CAPACITY) - expected).abs() < 1e-9);
}

// ============================================================================
// Realistic Deliveries
// ============================================================================

#[test]
fn test_greedy_covers_every_gift_once() {
    let gifts = sample_gifts();
    let result = greedy::pack(&DeliveryProblem::default(), &gifts);

    let mut ids: Vec<u32> = result.trips.iter().flat_map(|t| t.ids.iter().copied()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=gifts.len() as u32).collect::<Vec<_>>());

    for trip in &result.trips {
        assert!(trip.weight <= DEFAULT_CAPACITY, "trip over capacity: {}", trip.weight);
    }
    let weight: u64 = result.trips.iter().map(|t| t.weight).sum();
    assert_eq!(weight, total_weight(&gifts));
}

#[test]
fn test_greedy_trip_distances_add_up() {
    let result = greedy::pack(&DeliveryProblem::default(), &sample_gifts());
    let sum: f64 = result.trips.iter().map(|t| t.distance).sum();
    assert!((sum - result.total_distance).abs() < 1e-6);
}

#[test]
fn test_greedy_is_order_independent() {
    let gifts = sample_gifts();
    let mut reversed = gifts.clone();
    reversed.reverse();
    let mut rotated = gifts.clone();
    rotated.rotate_left(5);

    let baseline = greedy_solve(&gifts, DEFAULT_CAPACITY);
    assert_eq!(greedy_solve(&reversed, DEFAULT_CAPACITY), baseline);
    assert_eq!(greedy_solve(&rotated, DEFAULT_CAPACITY), baseline);
}

#[test]
fn test_annealing_improves_on_its_starting_point() {
    let problem = DeliveryProblem::default();
    let annealer = Annealer::new(AnnealOptions::default()).unwrap();
    let result = annealer.run(&problem, &sample_gifts(), &mut rng(17));

    let initial = result.best_history[0];
    assert!(result.best_distance <= initial);
    assert!(result.improving_moves > 0);
}

#[test]
fn test_annealing_best_respects_capacity() {
    let problem = DeliveryProblem::default();
    let annealer = Annealer::new(AnnealOptions::default()).unwrap();
    let result = annealer.run(&problem, &sample_gifts(), &mut rng(23));

    for trip in problem.partition(&result.best_order) {
        assert!(trip.weight <= DEFAULT_CAPACITY);
    }
}

#[test]
fn test_plan_and_report() {
    let gifts = sample_gifts();
    let config = PlannerConfig::default().with_restarts(3);
    let result = plan(&config, &gifts, &mut rng(5)).unwrap();

    let ingest = ingest::IngestReport {
        gifts: gifts.clone(),
        discarded: 2,
    };
    let report = SolveReport::new(&config.problem(), &ingest, 5, &result);

    assert_eq!(report.gifts, gifts.len());
    assert_eq!(report.discarded_lines, 2);
    assert_eq!(report.total_grams, total_weight(&gifts));
    assert_eq!(report.greedy.trips, result.greedy.trips.len());
    assert!(report.annealing.trips >= 1);

    let text = report.to_string();
    assert!(text.starts_with("total distance via greedy approach: "));
    assert!(text.contains("total distance via simulated annealing: "));
}

// ============================================================================
// Ingestion
// ============================================================================

#[test]
fn test_load_gifts_from_file() {
    let path = std::env::temp_dir().join(format!("gift-planner-{}.txt", std::process::id()));
    std::fs::write(&path, "1;66.5039;25.7294;1200\nbroken line\n2;68.6586;27.5411;800\n").unwrap();

    let report = ingest::load_gifts(&path, DEFAULT_CAPACITY);
    std::fs::remove_file(&path).ok();
    let report = report.unwrap();

    assert_eq!(report.gifts.len(), 2);
    assert_eq!(report.discarded, 1);
    assert!(greedy_solve(&report.gifts, DEFAULT_CAPACITY) > 0.0);
}
