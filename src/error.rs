//! Ошибки конфигурации и вычисления нечеткого вывода

use thiserror::Error;

/// Ошибки нечеткого вывода
///
/// Все варианты, кроме `StoreFull`, означают ошибку конфигурации:
/// повторный вызов с теми же данными даст ту же ошибку.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FuzzyError {
    /// Точки излома функции принадлежности не упорядочены по x
    #[error("membership breakpoints are not non-decreasing")]
    NonMonotonicBreakpoints,
    /// Точка излома равна NaN или бесконечности
    #[error("membership breakpoint is not finite")]
    NonFiniteBreakpoint,
    /// Уровень плеча вне [0, 1]
    #[error("shoulder level must lie in [0, 1]")]
    InvalidShoulderLevel,
    /// Для терма не задана функция принадлежности
    #[error("no membership function for term {term} of {variable}")]
    MissingMembership {
        variable: &'static str,
        term: &'static str,
    },
    /// Правило ссылается на терм, который не был фаззифицирован
    #[error("degree of {variable}.{term} was never fuzzified")]
    MissingDegree {
        variable: &'static str,
        term: &'static str,
    },
    /// Перечисление термов пустое
    #[error("variable {variable} has no terms")]
    NoTerms { variable: &'static str },
    /// Термов больше, чем допускает движок
    #[error("variable {variable} has more terms than supported")]
    TooManyTerms { variable: &'static str },
    /// Хранилище степеней заполнено
    #[error("fuzzy value store is full")]
    StoreFull,
    /// Правил больше, чем вмещает буфер выходов правил
    #[error("rule set holds more rules than the output buffer")]
    TooManyRules,
    /// Разрешение дефаззификации меньше двух точек
    #[error("centroid resolution must be at least 2 samples")]
    InvalidResolution,
}

// Реализация Format для defmt
#[cfg(feature = "defmt")]
impl defmt::Format for FuzzyError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FuzzyError::NonMonotonicBreakpoints => {
                defmt::write!(fmt, "Fuzzy: non-monotonic breakpoints")
            }
            FuzzyError::NonFiniteBreakpoint => defmt::write!(fmt, "Fuzzy: non-finite breakpoint"),
            FuzzyError::InvalidShoulderLevel => defmt::write!(fmt, "Fuzzy: invalid shoulder level"),
            FuzzyError::MissingMembership { variable, term } => {
                defmt::write!(fmt, "Fuzzy: no membership for {}.{}", variable, term)
            }
            FuzzyError::MissingDegree { variable, term } => {
                defmt::write!(fmt, "Fuzzy: {}.{} not fuzzified", variable, term)
            }
            FuzzyError::NoTerms { variable } => {
                defmt::write!(fmt, "Fuzzy: no terms in {}", variable)
            }
            FuzzyError::TooManyTerms { variable } => {
                defmt::write!(fmt, "Fuzzy: too many terms in {}", variable)
            }
            FuzzyError::StoreFull => defmt::write!(fmt, "Fuzzy: value store full"),
            FuzzyError::TooManyRules => defmt::write!(fmt, "Fuzzy: too many rules"),
            FuzzyError::InvalidResolution => defmt::write!(fmt, "Fuzzy: invalid resolution"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_degree_message_names_term() {
        let err = FuzzyError::MissingDegree {
            variable: "Speed",
            term: "Fast",
        };
        assert_eq!(err.to_string(), "degree of Speed.Fast was never fuzzified");
    }
}
