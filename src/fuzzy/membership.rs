//! Функции принадлежности

use crate::error::FuzzyError;
use crate::utils::math::{clamp_degree, inverse_lerp, lerp};

/// Точка излома (x, степень)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    /// Плечо: `from.y` левее `from.x`, `to.y` правее `to.x`, линейно между ними
    Shoulder {
        min_x: f64,
        from: Point,
        to: Point,
        max_x: f64,
    },
    /// Треугольник 0 -> 1 -> 0
    Triangular { left: f64, peak: f64, right: f64 },
    /// Трапеция 0 -> 1 (плато) -> 0
    Trapezoid {
        left: f64,
        left_top: f64,
        right_top: f64,
        right: f64,
    },
}

/// Функция принадлежности ℝ -> [0, 1]
///
/// Создается только через проверяющие конструкторы, поэтому точки излома
/// всегда конечны и упорядочены по x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipFunction {
    shape: Shape,
}

impl MembershipFunction {
    /// Плечо общего вида
    ///
    /// # Параметры
    /// * `min_x`, `max_x` - границы области определения
    /// * `from`, `to` - начало и конец линейного участка
    pub fn shoulder(min_x: f64, from: Point, to: Point, max_x: f64) -> Result<Self, FuzzyError> {
        check_ordered(&[min_x, from.x, to.x, max_x])?;
        for level in [from.y, to.y] {
            if !(0.0..=1.0).contains(&level) {
                return Err(FuzzyError::InvalidShoulderLevel);
            }
        }

        Ok(Self {
            shape: Shape::Shoulder {
                min_x,
                from,
                to,
                max_x,
            },
        })
    }

    /// Левое плечо: 1 до `full_until`, 0 начиная с `zero_from`
    pub fn left_shoulder(
        min_x: f64,
        full_until: f64,
        zero_from: f64,
        max_x: f64,
    ) -> Result<Self, FuzzyError> {
        Self::shoulder(
            min_x,
            Point::new(full_until, 1.0),
            Point::new(zero_from, 0.0),
            max_x,
        )
    }

    /// Правое плечо: 0 до `zero_until`, 1 начиная с `full_from`
    pub fn right_shoulder(
        min_x: f64,
        zero_until: f64,
        full_from: f64,
        max_x: f64,
    ) -> Result<Self, FuzzyError> {
        Self::shoulder(
            min_x,
            Point::new(zero_until, 0.0),
            Point::new(full_from, 1.0),
            max_x,
        )
    }

    /// Треугольник с вершиной в `peak`
    pub fn triangular(left: f64, peak: f64, right: f64) -> Result<Self, FuzzyError> {
        check_ordered(&[left, peak, right])?;
        Ok(Self {
            shape: Shape::Triangular { left, peak, right },
        })
    }

    /// Трапеция с плато на [`left_top`, `right_top`]
    pub fn trapezoid(
        left: f64,
        left_top: f64,
        right_top: f64,
        right: f64,
    ) -> Result<Self, FuzzyError> {
        check_ordered(&[left, left_top, right_top, right])?;
        Ok(Self {
            shape: Shape::Trapezoid {
                left,
                left_top,
                right_top,
                right,
            },
        })
    }

    /// Степень принадлежности в точке `x`
    ///
    /// Определена для любого `x`: за пределами области значение насыщается,
    /// для NaN возвращается 0.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let value = match self.shape {
            Shape::Shoulder { from, to, .. } => {
                if x <= from.x {
                    from.y
                } else if x >= to.x {
                    to.y
                } else {
                    lerp(from.y, to.y, inverse_lerp(from.x, to.x, x))
                }
            }
            Shape::Triangular { left, peak, right } => {
                if x == peak {
                    1.0
                } else if x <= left || x >= right {
                    0.0
                } else if x < peak {
                    inverse_lerp(left, peak, x)
                } else {
                    1.0 - inverse_lerp(peak, right, x)
                }
            }
            Shape::Trapezoid {
                left,
                left_top,
                right_top,
                right,
            } => {
                if x >= left_top && x <= right_top {
                    1.0
                } else if x <= left || x >= right {
                    0.0
                } else if x < left_top {
                    inverse_lerp(left, left_top, x)
                } else {
                    1.0 - inverse_lerp(right_top, right, x)
                }
            }
        };

        clamp_degree(value)
    }

    /// Область определения (min, max)
    pub fn domain(&self) -> (f64, f64) {
        match self.shape {
            Shape::Shoulder { min_x, max_x, .. } => (min_x, max_x),
            Shape::Triangular { left, right, .. } => (left, right),
            Shape::Trapezoid { left, right, .. } => (left, right),
        }
    }

    /// Центр участка максимальной принадлежности
    pub fn representative(&self) -> f64 {
        match self.shape {
            Shape::Shoulder {
                min_x,
                from,
                to,
                max_x,
            } => {
                if from.y >= to.y {
                    (min_x + from.x) / 2.0
                } else {
                    (to.x + max_x) / 2.0
                }
            }
            Shape::Triangular { peak, .. } => peak,
            Shape::Trapezoid {
                left_top,
                right_top,
                ..
            } => (left_top + right_top) / 2.0,
        }
    }
}

/// Проверка конечности и неубывания точек излома
fn check_ordered(breakpoints: &[f64]) -> Result<(), FuzzyError> {
    if breakpoints.iter().any(|x| !x.is_finite()) {
        return Err(FuzzyError::NonFiniteBreakpoint);
    }
    if breakpoints.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(FuzzyError::NonMonotonicBreakpoints);
    }
    Ok(())
}
