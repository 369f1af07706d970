//! Следование машины по трассе: газ и руль
//!
//! Знаки входов: отрицательное отклонение - машина левее оси трассы,
//! отрицательный угол - нос смотрит левее трассы, отрицательная кривизна -
//! поворот налево.

use alloc::vec;
use alloc::vec::Vec;

use crate::config::controllers::vehicle::{
    MAX_ANGLE_DEG, MAX_CURVATURE, MAX_DISTANCE_M, MAX_SPEED_KMH, OUTPUT_LIMIT,
};
use crate::data::{VehicleCommand, VehicleState};
use crate::error::FuzzyError;
use crate::fuzzy::{
    Expr, FuzzyValueStore, InferenceChannel, LinguisticVariable, MembershipFunction, Rule,
    RuleSet, Term,
};
use crate::utils::math::constrain;

crate::fuzzy_terms! {
    pub enum Speed { Slow, Medium, Fast }
}

crate::fuzzy_terms! {
    pub enum PathDistance { VeryLeft, Left, Center, Right, VeryRight }
}

crate::fuzzy_terms! {
    pub enum PathAngle { VeryNegative, Negative, Neutral, Positive, VeryPositive }
}

crate::fuzzy_terms! {
    pub enum Curvature { SharpLeft, SlightLeft, Straight, SlightRight, SharpRight }
}

crate::fuzzy_terms! {
    pub enum LookAheadCurvature { SharpLeft, SlightLeft, Straight, SlightRight, SharpRight }
}

crate::fuzzy_terms! {
    pub enum Throttle { Brake, Coast, Accelerate }
}

crate::fuzzy_terms! {
    pub enum Wheel { TurnLeft, Straight, TurnRight }
}

fn speed_variable() -> Result<LinguisticVariable<Speed>, FuzzyError> {
    LinguisticVariable::builder()
        .term(
            Speed::Slow,
            MembershipFunction::left_shoulder(0.0, 0.0, 30.0, 60.0)?,
        )
        .term(
            Speed::Medium,
            MembershipFunction::trapezoid(20.0, 30.0, 45.0, 60.0)?,
        )
        .term(
            Speed::Fast,
            MembershipFunction::right_shoulder(20.0, 45.0, 60.0, MAX_SPEED_KMH)?,
        )
        .build()
}

fn distance_variable() -> Result<LinguisticVariable<PathDistance>, FuzzyError> {
    let max = MAX_DISTANCE_M;
    LinguisticVariable::builder()
        .term(
            PathDistance::VeryLeft,
            MembershipFunction::left_shoulder(-max, -max, -3.0, max)?,
        )
        .term(
            PathDistance::Left,
            MembershipFunction::trapezoid(-4.0, -3.0, -1.0, -0.5)?,
        )
        .term(
            PathDistance::Center,
            MembershipFunction::trapezoid(-1.5, -0.5, 0.5, 1.5)?,
        )
        .term(
            PathDistance::Right,
            MembershipFunction::trapezoid(0.5, 1.0, 3.0, 4.0)?,
        )
        .term(
            PathDistance::VeryRight,
            MembershipFunction::right_shoulder(-max, 3.0, max, max)?,
        )
        .build()
}

fn angle_variable() -> Result<LinguisticVariable<PathAngle>, FuzzyError> {
    let max = MAX_ANGLE_DEG;
    LinguisticVariable::builder()
        .term(
            PathAngle::VeryNegative,
            MembershipFunction::left_shoulder(-max, -max, -45.0, max)?,
        )
        .term(
            PathAngle::Negative,
            MembershipFunction::trapezoid(-60.0, -45.0, -20.0, -10.0)?,
        )
        .term(
            PathAngle::Neutral,
            MembershipFunction::trapezoid(-20.0, -10.0, 10.0, 20.0)?,
        )
        .term(
            PathAngle::Positive,
            MembershipFunction::trapezoid(10.0, 20.0, 45.0, 60.0)?,
        )
        .term(
            PathAngle::VeryPositive,
            MembershipFunction::right_shoulder(-max, 45.0, max, max)?,
        )
        .build()
}

/// Текущая кривизна и кривизна впереди размечаются одинаково
fn curvature_variable<T: Term>(terms: [T; 5]) -> Result<LinguisticVariable<T>, FuzzyError> {
    let max = MAX_CURVATURE;
    let [sharp_left, slight_left, straight, slight_right, sharp_right] = terms;
    LinguisticVariable::builder()
        .term(
            sharp_left,
            MembershipFunction::left_shoulder(-max, -max, -0.05, max)?,
        )
        .term(
            slight_left,
            MembershipFunction::trapezoid(-0.08, -0.05, -0.02, -0.01)?,
        )
        .term(
            straight,
            MembershipFunction::trapezoid(-0.02, -0.01, 0.01, 0.02)?,
        )
        .term(
            slight_right,
            MembershipFunction::trapezoid(0.01, 0.02, 0.05, 0.08)?,
        )
        .term(
            sharp_right,
            MembershipFunction::right_shoulder(-max, 0.05, max, max)?,
        )
        .build()
}

/// Выход в [-1, 1]: отрицательная часть, плато около нуля, положительная часть
fn command_variable<T: Term>(terms: [T; 3]) -> Result<LinguisticVariable<T>, FuzzyError> {
    let limit = OUTPUT_LIMIT;
    let [negative, neutral, positive] = terms;
    LinguisticVariable::builder()
        .term(
            negative,
            MembershipFunction::left_shoulder(-limit, -limit, -0.1, limit)?,
        )
        .term(neutral, MembershipFunction::trapezoid(-0.3, -0.1, 0.1, 0.3)?)
        .term(
            positive,
            MembershipFunction::right_shoulder(-limit, 0.1, limit, limit)?,
        )
        .build()
}

fn throttle_rules() -> Vec<Rule<Throttle>> {
    use Speed::{Fast, Medium, Slow};
    use Throttle::{Accelerate, Brake, Coast};

    vec![
        // Скорость
        Rule::when(Expr::is(Slow)).then(Accelerate),
        Rule::when(Expr::is(Medium)).then(Accelerate),
        Rule::when(Expr::is(Fast)).then(Coast),
        // Кривизна под машиной
        Rule::when(Expr::is(Fast) & Expr::is(Curvature::SharpLeft)).then(Brake),
        Rule::when(Expr::is(Fast) & Expr::is(Curvature::SharpRight)).then(Brake),
        Rule::when(Expr::is(Fast) & Expr::is(Curvature::SlightLeft)).then(Coast),
        Rule::when(Expr::is(Fast) & Expr::is(Curvature::SlightRight)).then(Coast),
        // Кривизна впереди
        Rule::when(Expr::is(Fast) & Expr::is(LookAheadCurvature::SharpLeft)).then(Brake),
        Rule::when(Expr::is(Fast) & Expr::is(LookAheadCurvature::SharpRight)).then(Brake),
        Rule::when(Expr::is(Medium) & Expr::is(LookAheadCurvature::SharpLeft)).then(Coast),
        Rule::when(Expr::is(Medium) & Expr::is(LookAheadCurvature::SharpRight)).then(Coast),
        // Нос развернут от трассы
        Rule::when(Expr::is(PathAngle::VeryNegative)).then(Brake),
        Rule::when(Expr::is(PathAngle::VeryPositive)).then(Brake),
        Rule::when(Expr::is(Fast) & Expr::is(PathAngle::Negative)).then(Coast),
        Rule::when(Expr::is(Fast) & Expr::is(PathAngle::Positive)).then(Coast),
        // Далеко от оси
        Rule::when(Expr::is(Fast) & Expr::is(PathDistance::VeryLeft)).then(Brake),
        Rule::when(Expr::is(Fast) & Expr::is(PathDistance::VeryRight)).then(Brake),
        Rule::when(Expr::is(Medium) & Expr::is(PathDistance::VeryLeft)).then(Coast),
        Rule::when(Expr::is(Medium) & Expr::is(PathDistance::VeryRight)).then(Coast),
        // Идеальные условия
        Rule::when(Expr::all([
            Expr::is(PathDistance::Center),
            Expr::is(PathAngle::Neutral),
            Expr::is(Curvature::Straight),
            Expr::is(LookAheadCurvature::Straight),
        ]))
        .then(Accelerate),
    ]
}

fn wheel_rules() -> Vec<Rule<Wheel>> {
    use Wheel::{Straight, TurnLeft, TurnRight};

    vec![
        // Отклонение от оси
        Rule::when(Expr::is(PathDistance::VeryLeft)).then(TurnRight),
        Rule::when(Expr::is(PathDistance::Left)).then(TurnRight),
        Rule::when(Expr::is(PathDistance::Center)).then(Straight),
        Rule::when(Expr::is(PathDistance::Right)).then(TurnLeft),
        Rule::when(Expr::is(PathDistance::VeryRight)).then(TurnLeft),
        // Угол к трассе
        Rule::when(Expr::is(PathAngle::VeryNegative)).then(TurnRight),
        Rule::when(Expr::is(PathAngle::Negative)).then(TurnRight),
        Rule::when(Expr::is(PathAngle::Neutral)).then(Straight),
        Rule::when(Expr::is(PathAngle::Positive)).then(TurnLeft),
        Rule::when(Expr::is(PathAngle::VeryPositive)).then(TurnLeft),
        // Кривизна под машиной
        Rule::when(Expr::is(Curvature::SharpLeft)).then(TurnLeft),
        Rule::when(Expr::is(Curvature::SlightLeft)).then(TurnLeft),
        Rule::when(Expr::is(Curvature::Straight)).then(Straight),
        Rule::when(Expr::is(Curvature::SlightRight)).then(TurnRight),
        Rule::when(Expr::is(Curvature::SharpRight)).then(TurnRight),
        // Кривизна впереди
        Rule::when(Expr::is(LookAheadCurvature::SharpLeft)).then(TurnLeft),
        Rule::when(Expr::is(LookAheadCurvature::SlightLeft)).then(TurnLeft),
        Rule::when(Expr::is(LookAheadCurvature::SlightRight)).then(TurnRight),
        Rule::when(Expr::is(LookAheadCurvature::SharpRight)).then(TurnRight),
        // Вход в поворот со смещением
        Rule::when(Expr::is(PathDistance::VeryLeft) & Expr::is(Curvature::SharpLeft)).then(TurnLeft),
        Rule::when(Expr::is(PathDistance::VeryRight) & Expr::is(Curvature::SharpRight)).then(TurnRight),
        // Смещение и угол в одну сторону
        Rule::when(Expr::is(PathDistance::VeryLeft) & Expr::is(PathAngle::VeryNegative)).then(TurnRight),
        Rule::when(Expr::is(PathDistance::VeryRight) & Expr::is(PathAngle::VeryPositive)).then(TurnLeft),
        // Занос
        Rule::when(Expr::is(PathDistance::VeryLeft) & Expr::is(PathAngle::VeryPositive)).then(TurnLeft),
        Rule::when(Expr::is(PathDistance::VeryRight) & Expr::is(PathAngle::VeryNegative)).then(TurnRight),
    ]
}

/// Нечеткий водитель: газ и руль по положению относительно трассы
pub struct VehicleController {
    speed: LinguisticVariable<Speed>,
    distance: LinguisticVariable<PathDistance>,
    angle: LinguisticVariable<PathAngle>,
    curvature: LinguisticVariable<Curvature>,
    look_ahead: LinguisticVariable<LookAheadCurvature>,
    throttle: InferenceChannel<Throttle>,
    wheel: InferenceChannel<Wheel>,
    /// Степени входов последнего такта
    inputs: FuzzyValueStore,
}

impl VehicleController {
    pub fn new() -> Result<Self, FuzzyError> {
        let throttle = RuleSet::new(
            command_variable([Throttle::Brake, Throttle::Coast, Throttle::Accelerate])?,
            throttle_rules(),
        )?;
        let wheel = RuleSet::new(
            command_variable([Wheel::TurnLeft, Wheel::Straight, Wheel::TurnRight])?,
            wheel_rules(),
        )?;

        info!(
            "Контроллер машины готов: {} правил газа, {} правил руля",
            throttle.rules().len(),
            wheel.rules().len()
        );

        Ok(Self {
            speed: speed_variable()?,
            distance: distance_variable()?,
            angle: angle_variable()?,
            curvature: curvature_variable([
                Curvature::SharpLeft,
                Curvature::SlightLeft,
                Curvature::Straight,
                Curvature::SlightRight,
                Curvature::SharpRight,
            ])?,
            look_ahead: curvature_variable([
                LookAheadCurvature::SharpLeft,
                LookAheadCurvature::SlightLeft,
                LookAheadCurvature::Straight,
                LookAheadCurvature::SlightRight,
                LookAheadCurvature::SharpRight,
            ])?,
            throttle: InferenceChannel::new(throttle),
            wheel: InferenceChannel::new(wheel),
            inputs: FuzzyValueStore::new(),
        })
    }

    /// Один такт: состояние машины -> газ и руль
    pub fn update(&mut self, state: &VehicleState) -> Result<VehicleCommand, FuzzyError> {
        self.speed.fuzzify(state.speed_kmh, &mut self.inputs)?;
        self.distance
            .fuzzify(state.distance_from_path_m, &mut self.inputs)?;
        self.angle.fuzzify(state.angle_to_path_deg, &mut self.inputs)?;
        self.curvature.fuzzify(state.curvature, &mut self.inputs)?;
        self.look_ahead
            .fuzzify(state.look_ahead_curvature, &mut self.inputs)?;

        let throttle = self.throttle.run(&self.inputs)?;
        let steering = self.wheel.run(&self.inputs)?;

        Ok(VehicleCommand {
            throttle: constrain(throttle, -OUTPUT_LIMIT, OUTPUT_LIMIT),
            steering: constrain(steering, -OUTPUT_LIMIT, OUTPUT_LIMIT),
        })
    }

    /// Степени входов последнего такта
    pub fn inputs(&self) -> &FuzzyValueStore {
        &self.inputs
    }

    pub fn throttle(&self) -> &InferenceChannel<Throttle> {
        &self.throttle
    }

    pub fn wheel(&self) -> &InferenceChannel<Wheel> {
        &self.wheel
    }

    pub fn reset(&mut self) {
        self.inputs.clear();
        self.throttle.reset();
        self.wheel.reset();
    }
}
