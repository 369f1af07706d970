//! Сквозные сценарии: от четких входов до четких выходов

use approx::{assert_abs_diff_eq, assert_relative_eq};

use fuzzy_inference::control::three_way::{three_way_variable, ThreeWayBreakpoints};
use fuzzy_inference::control::{BalanceController, VehicleController};
use fuzzy_inference::data::{BallState, VehicleState};
use fuzzy_inference::fuzzy::{DegreeReport, InferenceChannel};
use fuzzy_inference::{
    fuzzy_terms, Defuzzer, Evaluator, Expr, Fallback, FuzzyError, FuzzyValue, FuzzyValueStore,
    Merger, Rule, RuleSet,
};

fuzzy_terms! {
    enum BallPos { Negative, Zero, Positive }
}

fuzzy_terms! {
    enum HeadRot { RotNegDir, NoRot, RotPosDir }
}

fn head_rot_rules() -> RuleSet<HeadRot> {
    let output = three_way_variable(
        [HeadRot::RotNegDir, HeadRot::NoRot, HeadRot::RotPosDir],
        &ThreeWayBreakpoints::symmetric(20.0, 0.0, 1.0),
    )
    .unwrap();
    RuleSet::new(
        output,
        vec![
            Rule::when(Expr::is(BallPos::Negative)).then(HeadRot::RotPosDir),
            Rule::when(Expr::is(BallPos::Zero)).then(HeadRot::NoRot),
            Rule::when(Expr::is(BallPos::Positive)).then(HeadRot::RotNegDir),
        ],
    )
    .unwrap()
}

fn ball_degrees(negative: f64, zero: f64, positive: f64) -> FuzzyValueStore {
    let mut store = FuzzyValueStore::new();
    store.set(BallPos::Negative, negative).unwrap();
    store.set(BallPos::Zero, zero).unwrap();
    store.set(BallPos::Positive, positive).unwrap();
    store
}

#[test]
fn dead_zone_velocity_terms() {
    let velocity = three_way_variable(
        [BallPos::Negative, BallPos::Zero, BallPos::Positive],
        &ThreeWayBreakpoints::symmetric(1.0, 0.01, 0.75),
    )
    .unwrap();
    let mut store = FuzzyValueStore::new();

    velocity.fuzzify(0.0, &mut store).unwrap();
    assert_eq!(store.degree(BallPos::Zero), Ok(1.0));
    assert_eq!(store.degree(BallPos::Negative), Ok(0.0));
    assert_eq!(store.degree(BallPos::Positive), Ok(0.0));

    velocity.fuzzify(0.5, &mut store).unwrap();
    let positive = store.degree(BallPos::Positive).unwrap();
    assert_eq!(store.degree(BallPos::Negative), Ok(0.0));
    assert!(positive > 0.0 && positive < 1.0);
    assert_relative_eq!(positive, 0.49 / 0.74, max_relative = 1e-12);
    let zero = store.degree(BallPos::Zero).unwrap();
    assert_relative_eq!(zero, 0.25 / 0.74, max_relative = 1e-12);
}

#[test]
fn single_zero_rule_keeps_head_level() {
    let mut channel = InferenceChannel::new(head_rot_rules());
    let crisp = channel.run(&ball_degrees(0.0, 0.7, 0.0)).unwrap();

    assert_abs_diff_eq!(crisp, 0.0, epsilon = 1e-9);
    assert_eq!(channel.merged().get(HeadRot::NoRot), Some(0.7));
    assert_eq!(channel.merged().get(HeadRot::RotPosDir), Some(0.0));
}

#[test]
fn repeated_consequent_merges_to_max() {
    let outputs = [
        FuzzyValue::new(HeadRot::NoRot, 0.3),
        FuzzyValue::new(HeadRot::NoRot, 0.8),
    ];
    let mut merged = FuzzyValueStore::new();
    Merger::default().merge(&outputs, &mut merged).unwrap();
    assert_eq!(merged.get(HeadRot::NoRot), Some(0.8));

    Merger::CappedSum.merge(&outputs, &mut merged).unwrap();
    assert_eq!(merged.get(HeadRot::NoRot), Some(1.0));
}

#[test]
fn silent_rules_fall_back_to_midpoint() {
    let mut channel = InferenceChannel::new(head_rot_rules());
    let crisp = channel.run(&ball_degrees(0.0, 0.0, 0.0)).unwrap();
    assert_eq!(crisp, 0.0);

    let mut channel =
        InferenceChannel::new(head_rot_rules().with_fallback(Fallback::Value(7.5)));
    assert_eq!(channel.run(&ball_degrees(0.0, 0.0, 0.0)).unwrap(), 7.5);
}

#[test]
fn product_sum_and_mean_of_maxima_are_selectable() {
    let rules = head_rot_rules()
        .with_evaluator(Evaluator::ProductSum)
        .with_defuzzer(Defuzzer::MeanOfMaxima)
        .unwrap();
    let mut channel = InferenceChannel::new(rules);

    // Представители: -20, 0, 20
    let crisp = channel.run(&ball_degrees(0.5, 0.5, 0.0)).unwrap();
    assert_abs_diff_eq!(crisp, 10.0, epsilon = 1e-12);
}

#[test]
fn missing_input_is_reported() {
    let mut channel = InferenceChannel::new(head_rot_rules());
    let mut partial = FuzzyValueStore::new();
    partial.set(BallPos::Zero, 1.0).unwrap();

    let error = channel.run(&partial).unwrap_err();
    assert_eq!(
        error,
        FuzzyError::MissingDegree {
            variable: "BallPos",
            term: "Negative",
        }
    );
    assert_eq!(
        error.to_string(),
        "degree of BallPos.Negative was never fuzzified"
    );
}

#[test]
fn balance_corrects_toward_center() {
    let mut controller = BalanceController::new().unwrap();

    let rotation = controller
        .update(&BallState {
            pos_x: 1.0,
            ..BallState::default()
        })
        .unwrap();
    assert!(rotation.z_deg > 0.0);

    let rotation = controller
        .update(&BallState {
            pos_z: 1.5,
            vel_z: 0.4,
            ..BallState::default()
        })
        .unwrap();
    assert!(rotation.x_deg < 0.0);
    assert!(rotation.x_deg >= -20.0);
}

#[test]
fn vehicle_scenarios() {
    let mut controller = VehicleController::new().unwrap();

    let command = controller
        .update(&VehicleState {
            speed_kmh: 30.0,
            distance_from_path_m: -4.5,
            ..VehicleState::default()
        })
        .unwrap();
    assert!(command.steering > 0.0);

    let command = controller
        .update(&VehicleState {
            speed_kmh: 10.0,
            ..VehicleState::default()
        })
        .unwrap();
    assert!(command.throttle > 0.0);

    let command = controller
        .update(&VehicleState {
            speed_kmh: 80.0,
            curvature: 0.1,
            ..VehicleState::default()
        })
        .unwrap();
    assert!(command.throttle < 0.0);

    let report = DegreeReport::<fuzzy_inference::control::vehicle::Speed>::new(
        controller.inputs(),
    )
    .to_string();
    assert_eq!(report, "Speed: Slow=0.000 Medium=0.000 Fast=1.000");
}
