//! End-to-end scenarios for the emissions & credits calculator

use minezero_core::environmental::{
    calculate_emissions, calculate_offsets, EmissionInput, MineType, OffsetMode,
    OffsetRequirements, CARBON_MARKET_RATE,
};
use minezero_core::CalculatorError;

fn input(
    diesel: f64,
    electricity: f64,
    explosives: f64,
    production: f64,
    target: f64,
    mode: OffsetMode,
) -> EmissionInput {
    EmissionInput::new(diesel, electricity, explosives, production, target, mode)
}

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn test_combined_offset_scenario() {
    let result =
        calculate_emissions(&input(1000.0, 5000.0, 2.0, 10000.0, 0.5, OffsetMode::Combined))
            .unwrap();

    assert!(approx(result.total_emissions, 6520.0, 1e-9));
    assert!(approx(result.emission_intensity, 0.000652, 1e-12));
    assert!(result.is_eligible_for_credits);
    assert!(approx(result.carbon_credits, 4993.48, 1e-6));
    assert!(approx(result.credit_value, 1_498_044.0, 1e-3));
    assert_eq!(result.trees_required, 261);
    assert_eq!(result.solar_panels_required, 27);
    assert_eq!(result.emissions_after_offset, 0.0);
    assert!(approx(result.reduction_percentage, 100.0, 1e-9));
}

#[test]
fn test_zero_emissions_reduction_is_zero() {
    let result =
        calculate_emissions(&input(0.0, 0.0, 0.0, 500.0, 0.5, OffsetMode::Trees)).unwrap();

    assert_eq!(result.total_emissions, 0.0);
    assert_eq!(result.reduction_percentage, 0.0);
    assert_eq!(result.emissions_after_offset, 0.0);
    assert_eq!(result.trees_required, 0);
    assert!(result.is_eligible_for_credits);
    assert!(approx(result.carbon_credits, 250.0, 1e-9));
}

#[test]
fn test_zero_production_is_refused() {
    let err = calculate_emissions(&input(10.0, 10.0, 1.0, 0.0, 0.5, OffsetMode::Solar))
        .unwrap_err();
    assert!(matches!(err, CalculatorError::Validation(_)));

    let err = calculate_emissions(&input(10.0, 10.0, 1.0, -3.0, 0.5, OffsetMode::Solar))
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_intensity_equal_to_target_is_not_eligible() {
    let probe = calculate_emissions(&input(1000.0, 0.0, 0.0, 1000.0, 1.0, OffsetMode::Trees))
        .unwrap();
    let tie = probe.emission_intensity;

    let result =
        calculate_emissions(&input(1000.0, 0.0, 0.0, 1000.0, tie, OffsetMode::Trees)).unwrap();
    assert_eq!(result.emission_intensity, tie);
    assert!(!result.is_eligible_for_credits);
    assert_eq!(result.carbon_credits, 0.0);
    assert_eq!(result.credit_value, 0.0);
}

#[test]
fn test_trees_offset_exact_cover() {
    let requirements = OffsetRequirements::for_emissions(100.0);
    assert_eq!(requirements.trees_required, 4);
    assert_eq!(calculate_offsets(100.0, OffsetMode::Trees), 100.0);

    // 250 liters of diesel is 650 kg, exactly 26 trees
    let result =
        calculate_emissions(&input(250.0, 0.0, 0.0, 1000.0, 0.5, OffsetMode::Trees)).unwrap();
    assert!(approx(result.total_emissions, 650.0, 1e-9));
    assert_eq!(result.trees_required, 26);
    assert!(approx(result.emissions_after_offset, 0.0, 1e-9));
    assert!(approx(result.reduction_percentage, 100.0, 1e-9));
}

#[test]
fn test_ineligible_mine_has_no_credits() {
    // 1,000,000 liters of diesel on 1,000 tons of output: 2.6 tCO2/ton
    let result =
        calculate_emissions(&input(1_000_000.0, 0.0, 0.0, 1000.0, 0.5, OffsetMode::Solar))
            .unwrap();
    assert!(!result.is_eligible_for_credits);
    assert_eq!(result.carbon_credits, 0.0);
    assert_eq!(result.credit_value_at(CARBON_MARKET_RATE * 2.0), 0.0);
}

#[test]
fn test_offset_helper_agrees_with_calculator() {
    for mode in [OffsetMode::Trees, OffsetMode::Solar, OffsetMode::Combined] {
        let result = calculate_emissions(&input(123.0, 4567.0, 0.3, 800.0, 0.2, mode)).unwrap();
        let offset = calculate_offsets(result.total_emissions, mode);
        assert!(
            approx(result.total_emissions - offset, result.emissions_after_offset, 1e-9),
            "mode {mode} disagrees"
        );
    }
}

#[test]
fn test_benchmark_comparison_for_underground_mine() {
    let request = input(1_000_000.0, 0.0, 0.0, 1000.0, 0.5, OffsetMode::Combined)
        .with_mine_type(MineType::Underground);
    let result = calculate_emissions(&request).unwrap();
    let benchmark = result.benchmark.unwrap();
    assert!(!benchmark.outperforms_industry());
    assert!(approx(benchmark.gap, 2.0, 1e-9));
}

#[test]
fn test_result_serializes_in_camel_case() {
    let result = calculate_emissions(&input(1.0, 1.0, 1.0, 1.0, 1.0, OffsetMode::Trees)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("totalEmissions").is_some());
    assert!(json.get("isEligibleForCredits").is_some());
    assert!(json.get("benchmark").is_none());
}
