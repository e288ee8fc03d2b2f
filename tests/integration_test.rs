use chrono::NaiveDate;
use tour_calculator::{
    models::{Badge, Category, EstimatorError, Mode, ProgressionInput, SeasonOutlook},
    scoring::{
        clamp_weight, compute_daily_pace, compute_games_needed, compute_weighted_playtime,
        run_projection, CalculationRequest, ProgressionCalculator,
    },
    utils::{format_duration, report, FixedClock},
    Settings,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn world_tour_input(current_points: i64) -> ProgressionInput {
    ProgressionInput {
        current_points,
        goal: Badge::new("Emerald 1", 2400),
        categories: vec![
            Category::new("Round one", 2, 13.0),
            Category::new("Round two", 6, 26.0),
            Category::new("Lose final round", 14, 39.0),
            Category::new("Win final round", 25, 39.0),
        ],
        season_end: date(2025, 12, 11),
        today: date(2025, 12, 1),
    }
}

#[test]
fn test_end_to_end_near_emerald() {
    let result = run_projection(&world_tour_input(2350)).unwrap();

    assert_eq!(result.points_remaining, 50);
    let games: Vec<u64> = result.categories.iter().map(|c| c.games_needed).collect();
    assert_eq!(games, vec![25, 9, 4, 2]);
    let playtimes: Vec<f64> = result.categories.iter().map(|c| c.playtime_minutes).collect();
    assert_eq!(playtimes, vec![325.0, 234.0, 156.0, 78.0]);
}

#[test]
fn test_documented_properties() {
    assert_eq!(compute_games_needed(-10, 6).unwrap(), 0);
    assert_eq!(compute_daily_pace(47, 10).unwrap(), 4);
    assert_eq!(compute_weighted_playtime(&[100.0, 200.0], &[50, 50]), 150.0);

    assert_eq!(format_duration(59.0), "59 minutes");
    assert_eq!(format_duration(60.0), "1 hours, 0 minutes");
    assert_eq!(format_duration(1440.0), "1 days, 0 hours, 0 minutes");

    let mut weights = vec![60, 50, 0, 0];
    clamp_weight(&mut weights, 1);
    assert_eq!(weights, vec![60, 40, 0, 0]);
}

#[test]
fn test_projection_idempotent() {
    let input = world_tour_input(777);
    assert_eq!(run_projection(&input).unwrap(), run_projection(&input).unwrap());
}

#[test]
fn test_calculator_with_fixed_clock() {
    let calculator = ProgressionCalculator::new(Settings::default(), FixedClock(date(2025, 12, 1)));
    let request = CalculationRequest::with_defaults(calculator.settings(), Mode::WorldTour, "2350");

    let result = calculator.calculate(&request).unwrap();

    match result.outlook {
        SeasonOutlook::Active {
            days_remaining,
            daily_pace,
            ..
        } => {
            assert_eq!(days_remaining, 10);
            assert_eq!(daily_pace, 5);
        }
        other => panic!("expected an active season, got {:?}", other),
    }

    let summary = report::summary_lines(&result);
    assert_eq!(summary[0], "Points remaining: 50 (goal Emerald 1: 2400)");
}

#[test]
fn test_calculator_surfaces_bad_input_as_status() {
    let calculator = ProgressionCalculator::new(Settings::default(), FixedClock(date(2025, 12, 1)));
    let request = CalculationRequest::with_defaults(calculator.settings(), Mode::WorldTour, "23x0");

    let err = calculator.calculate(&request).unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidNumericInput(_)));
    assert_eq!(err.user_message(), "Please enter a valid number");
}

#[test]
fn test_season_already_over() {
    let calculator = ProgressionCalculator::new(Settings::default(), FixedClock(date(2025, 12, 11)));
    let request = CalculationRequest::with_defaults(calculator.settings(), Mode::QuickPlay, "0");

    let result = calculator.calculate(&request).unwrap();
    assert!(!result.outlook.is_active());
    assert_eq!(result.days_remaining(), 0);
    assert!(report::summary_lines(&result)
        .iter()
        .any(|l| l.contains("season has ended")));
}

#[test]
fn test_result_serializes_to_json() {
    let result = run_projection(&world_tour_input(2350)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["points_remaining"], 50);
    assert_eq!(json["outlook"]["status"], "active");
    assert_eq!(json["categories"][3]["games_needed"], 2);
}
