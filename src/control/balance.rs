//! Балансировка шара на голове
//!
//! Входы: положение и скорость шара по X и Z относительно центра головы.
//! Выходы: наклон головы вокруг X и Z. Оси независимы: наклон вокруг X
//! корректирует смещение по Z, наклон вокруг Z корректирует смещение по X.

use alloc::vec;

use crate::config::controllers::balance::{
    ABS_MAX_ANGLE_DEG, DEAD_ZONE, HALF_WIDTH_M, MAX_ADJUST, MAX_SPEED_MS,
};
use crate::control::three_way::{three_way_variable, ThreeWayBreakpoints};
use crate::data::{BallState, HeadRotation};
use crate::error::FuzzyError;
use crate::fuzzy::{Expr, FuzzyValueStore, InferenceChannel, LinguisticVariable, Rule, RuleSet};

crate::fuzzy_terms! {
    pub enum BallPosX { Negative, Zero, Positive }
}

crate::fuzzy_terms! {
    pub enum BallPosZ { Negative, Zero, Positive }
}

crate::fuzzy_terms! {
    pub enum BallVelX { Negative, Zero, Positive }
}

crate::fuzzy_terms! {
    pub enum BallVelZ { Negative, Zero, Positive }
}

crate::fuzzy_terms! {
    pub enum HeadRotX { RotNegDir, NoRot, RotPosDir }
}

crate::fuzzy_terms! {
    pub enum HeadRotZ { RotNegDir, NoRot, RotPosDir }
}

/// Нечеткий регулятор наклона головы
pub struct BalanceController {
    pos_x: LinguisticVariable<BallPosX>,
    pos_z: LinguisticVariable<BallPosZ>,
    vel_x: LinguisticVariable<BallVelX>,
    vel_z: LinguisticVariable<BallVelZ>,
    head_rot_x: InferenceChannel<HeadRotX>,
    head_rot_z: InferenceChannel<HeadRotZ>,
    /// Степени входов последнего такта
    inputs: FuzzyValueStore,
}

impl BalanceController {
    pub fn new() -> Result<Self, FuzzyError> {
        let position = ThreeWayBreakpoints::symmetric(HALF_WIDTH_M, DEAD_ZONE, MAX_ADJUST);
        let velocity = ThreeWayBreakpoints::symmetric(MAX_SPEED_MS, DEAD_ZONE, MAX_ADJUST);
        let rotation = ThreeWayBreakpoints::symmetric(ABS_MAX_ANGLE_DEG, 0.0, 1.0);

        let pos_x = three_way_variable(
            [BallPosX::Negative, BallPosX::Zero, BallPosX::Positive],
            &position,
        )?;
        let pos_z = three_way_variable(
            [BallPosZ::Negative, BallPosZ::Zero, BallPosZ::Positive],
            &position,
        )?;
        let vel_x = three_way_variable(
            [BallVelX::Negative, BallVelX::Zero, BallVelX::Positive],
            &velocity,
        )?;
        let vel_z = three_way_variable(
            [BallVelZ::Negative, BallVelZ::Zero, BallVelZ::Positive],
            &velocity,
        )?;

        // Шар уходит в +Z - наклон вокруг X в отрицательную сторону
        let head_rot_x = RuleSet::new(
            three_way_variable(
                [HeadRotX::RotNegDir, HeadRotX::NoRot, HeadRotX::RotPosDir],
                &rotation,
            )?,
            vec![
                Rule::when(Expr::is(BallPosZ::Negative)).then(HeadRotX::RotPosDir),
                Rule::when(Expr::is(BallPosZ::Zero)).then(HeadRotX::NoRot),
                Rule::when(Expr::is(BallPosZ::Positive)).then(HeadRotX::RotNegDir),
                Rule::when(Expr::is(BallVelZ::Negative)).then(HeadRotX::RotPosDir),
                Rule::when(Expr::is(BallVelZ::Zero)).then(HeadRotX::NoRot),
                Rule::when(Expr::is(BallVelZ::Positive)).then(HeadRotX::RotNegDir),
            ],
        )?;

        // Шар уходит в +X - наклон вокруг Z в положительную сторону
        let head_rot_z = RuleSet::new(
            three_way_variable(
                [HeadRotZ::RotNegDir, HeadRotZ::NoRot, HeadRotZ::RotPosDir],
                &rotation,
            )?,
            vec![
                Rule::when(Expr::is(BallPosX::Positive)).then(HeadRotZ::RotPosDir),
                Rule::when(Expr::is(BallPosX::Zero)).then(HeadRotZ::NoRot),
                Rule::when(Expr::is(BallPosX::Negative)).then(HeadRotZ::RotNegDir),
                Rule::when(Expr::is(BallVelX::Positive)).then(HeadRotZ::RotPosDir),
                Rule::when(Expr::is(BallVelX::Zero)).then(HeadRotZ::NoRot),
                Rule::when(Expr::is(BallVelX::Negative)).then(HeadRotZ::RotNegDir),
            ],
        )?;

        info!("Контроллер балансировки готов");

        Ok(Self {
            pos_x,
            pos_z,
            vel_x,
            vel_z,
            head_rot_x: InferenceChannel::new(head_rot_x),
            head_rot_z: InferenceChannel::new(head_rot_z),
            inputs: FuzzyValueStore::new(),
        })
    }

    /// Один такт: состояние шара -> целевой наклон головы
    pub fn update(&mut self, ball: &BallState) -> Result<HeadRotation, FuzzyError> {
        self.pos_x.fuzzify(ball.pos_x, &mut self.inputs)?;
        self.pos_z.fuzzify(ball.pos_z, &mut self.inputs)?;
        self.vel_x.fuzzify(ball.vel_x, &mut self.inputs)?;
        self.vel_z.fuzzify(ball.vel_z, &mut self.inputs)?;

        let x_deg = self.head_rot_x.run(&self.inputs)?;
        let z_deg = self.head_rot_z.run(&self.inputs)?;

        Ok(HeadRotation { x_deg, z_deg })
    }

    /// Степени входов последнего такта
    pub fn inputs(&self) -> &FuzzyValueStore {
        &self.inputs
    }

    pub fn head_rot_x(&self) -> &InferenceChannel<HeadRotX> {
        &self.head_rot_x
    }

    pub fn head_rot_z(&self) -> &InferenceChannel<HeadRotZ> {
        &self.head_rot_z
    }

    /// Сброс памяти каналов и входных степеней
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.head_rot_x.reset();
        self.head_rot_z.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::DegreeReport;

    fn ball(pos_x: f64, pos_z: f64, vel_x: f64, vel_z: f64) -> BallState {
        BallState {
            pos_x,
            pos_z,
            vel_x,
            vel_z,
        }
    }

    #[test]
    fn test_resting_ball_keeps_head_level() {
        let mut controller = BalanceController::new().unwrap();
        let rotation = controller.update(&BallState::default()).unwrap();

        assert!(rotation.x_deg.abs() < 1e-9, "x = {}", rotation.x_deg);
        assert!(rotation.z_deg.abs() < 1e-9, "z = {}", rotation.z_deg);
    }

    #[test]
    fn test_ball_offset_along_x_tilts_around_z() {
        let mut controller = BalanceController::new().unwrap();
        let rotation = controller.update(&ball(1.0, 0.0, 0.0, 0.0)).unwrap();

        assert!(rotation.z_deg > 0.0);
        assert!(rotation.z_deg <= ABS_MAX_ANGLE_DEG);
        assert!(rotation.x_deg.abs() < 1e-9);

        let rotation = controller.update(&ball(-1.0, 0.0, 0.0, 0.0)).unwrap();
        assert!(rotation.z_deg < 0.0);
    }

    #[test]
    fn test_ball_offset_along_z_tilts_around_x() {
        let mut controller = BalanceController::new().unwrap();
        let rotation = controller.update(&ball(0.0, 1.0, 0.0, 0.0)).unwrap();
        assert!(rotation.x_deg < 0.0);

        let rotation = controller.update(&ball(0.0, -1.0, 0.0, -0.5)).unwrap();
        assert!(rotation.x_deg > 0.0);
    }

    #[test]
    fn test_velocity_adds_to_position() {
        let mut controller = BalanceController::new().unwrap();
        let still = controller.update(&ball(0.5, 0.0, 0.0, 0.0)).unwrap();
        let rolling = controller.update(&ball(0.5, 0.0, 0.6, 0.0)).unwrap();
        assert!(rolling.z_deg > still.z_deg);
    }

    #[test]
    fn test_diagnostics_after_update() {
        let mut controller = BalanceController::new().unwrap();
        controller.update(&BallState::default()).unwrap();

        assert_eq!(controller.inputs().len(), 12);
        assert_eq!(controller.head_rot_x().rule_outputs().len(), 6);
        assert_eq!(
            DegreeReport::<BallPosX>::new(controller.inputs()).to_string(),
            "BallPosX: Negative=0.000 Zero=1.000 Positive=0.000"
        );

        controller.reset();
        assert!(controller.inputs().is_empty());
        assert_eq!(controller.head_rot_z().last_output(), None);
    }
}
