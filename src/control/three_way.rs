//! Переменная из трех термов: левое плечо, середина, правое плечо
//!
//! ```text
//! -----------\   /--\   /-----------
//!             \ /    \ /
//!              \      \
//!             / \    / \
//!            /   \  /   \
//! low_min    min  lm hm  max     high_max
//! ```

use crate::error::FuzzyError;
use crate::fuzzy::{LinguisticVariable, MembershipFunction, Point, Term};

/// Точки излома трехтермовой переменной
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThreeWayBreakpoints {
    pub low_min: f64,
    pub min: f64,
    pub low_middle: f64,
    pub high_middle: f64,
    pub max: f64,
    pub high_max: f64,
}

impl Default for ThreeWayBreakpoints {
    fn default() -> Self {
        Self {
            low_min: -1.0,
            min: -1.0,
            low_middle: 0.0,
            high_middle: 0.0,
            max: 1.0,
            high_max: 1.0,
        }
    }
}

impl ThreeWayBreakpoints {
    /// Симметричная переменная на [-limit, limit]
    ///
    /// Плечи насыщаются на `limit * max_adjust`, середина имеет плато
    /// шириной `2 * dead_zone` (треугольник при нулевой зоне).
    pub fn symmetric(limit: f64, dead_zone: f64, max_adjust: f64) -> Self {
        Self {
            low_min: -limit,
            min: -limit * max_adjust,
            low_middle: -dead_zone,
            high_middle: dead_zone,
            max: limit * max_adjust,
            high_max: limit,
        }
    }
}

/// Построение переменной; термы `terms` идут слева направо
pub fn three_way_variable<T: Term>(
    terms: [T; 3],
    bp: &ThreeWayBreakpoints,
) -> Result<LinguisticVariable<T>, FuzzyError> {
    let [left, middle, right] = terms;

    let left_fx = MembershipFunction::shoulder(
        bp.low_min,
        Point::new(bp.min, 1.0),
        Point::new(bp.low_middle, 0.0),
        bp.max,
    )?;

    let middle_fx = if bp.low_middle == bp.high_middle {
        MembershipFunction::triangular(bp.min, bp.low_middle, bp.max)?
    } else {
        MembershipFunction::trapezoid(bp.min, bp.low_middle, bp.high_middle, bp.max)?
    };

    let right_fx = MembershipFunction::shoulder(
        bp.min,
        Point::new(bp.high_middle, 0.0),
        Point::new(bp.max, 1.0),
        bp.high_max,
    )?;

    LinguisticVariable::builder()
        .term(left, left_fx)
        .term(middle, middle_fx)
        .term(right, right_fx)
        .build()
}
