//! Математические функции и утилиты

use num_traits::Float;

use crate::config::engine::degree;

/// Ограничение значения в заданных пределах
#[inline(always)]
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Приведение степени принадлежности к [0, 1], NaN считается нулем
#[inline(always)]
pub fn clamp_degree(value: f64) -> f64 {
    if value.is_nan() {
        degree::MIN
    } else {
        constrain(value, degree::MIN, degree::MAX)
    }
}

/// Линейная интерполяция между двумя значениями
/// t: 0.0 = a, 1.0 = b
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * constrain(t, 0.0, 1.0)
}

/// Обратная линейная интерполяция - получение t из значения
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if Float::abs(b - a) < f64::EPSILON {
        0.0
    } else {
        constrain((value - a) / (b - a), 0.0, 1.0)
    }
}

/// Квадратный корень с защитой от отрицательных значений
#[inline]
pub fn safe_sqrt(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        libm::sqrt(value)
    }
}
