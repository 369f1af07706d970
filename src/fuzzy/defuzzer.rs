//! Дефаззификация: слитые степени выходной переменной -> четкое значение

use crate::config::engine::capacity::MAX_TERMS;
use crate::config::engine::defuzz::{DEFAULT_RESOLUTION, MIN_RESOLUTION};
use crate::error::FuzzyError;
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;
use crate::fuzzy::variable::LinguisticVariable;
use crate::utils::math::clamp_degree;

/// Метод дефаззификации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Defuzzer {
    /// Центр тяжести агрегированной кривой, `resolution` точек по области
    Centroid { resolution: usize },
    /// Среднее представителей термов, взвешенное степенями
    MeanOfMaxima,
}

impl Default for Defuzzer {
    fn default() -> Self {
        Defuzzer::Centroid {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl Defuzzer {
    pub const fn centroid(resolution: usize) -> Self {
        Defuzzer::Centroid { resolution }
    }

    pub fn validate(&self) -> Result<(), FuzzyError> {
        match *self {
            Defuzzer::Centroid { resolution } if resolution < MIN_RESOLUTION => {
                Err(FuzzyError::InvalidResolution)
            }
            _ => Ok(()),
        }
    }

    /// Четкое значение; `None`, если суммарный вес агрегированной кривой равен нулю
    ///
    /// Отсутствующие в `merged` степени считаются нулевыми.
    pub fn defuzzify<O: Term>(
        &self,
        output: &LinguisticVariable<O>,
        merged: &FuzzyValueStore,
    ) -> Option<f64> {
        // Степени термов читаются один раз на такт
        let mut caps = [0.0; MAX_TERMS];
        for (cap, &term) in caps.iter_mut().zip(O::ALL) {
            *cap = clamp_degree(merged.get(term).unwrap_or(0.0));
        }
        let caps = &caps[..O::ALL.len().min(MAX_TERMS)];

        if caps.iter().all(|&cap| cap <= 0.0) {
            return None;
        }

        match *self {
            Defuzzer::Centroid { resolution } => centroid(output, caps, resolution),
            Defuzzer::MeanOfMaxima => mean_of_maxima(output, caps),
        }
    }
}

/// Высота агрегированной кривой: максимум по термам усеченных функций
fn aggregated_height<O: Term>(output: &LinguisticVariable<O>, caps: &[f64], x: f64) -> f64 {
    O::ALL
        .iter()
        .zip(caps)
        .filter(|&(_, &cap)| cap > 0.0)
        .map(|(&term, &cap)| cap.min(output.degree(term, x)))
        .fold(0.0, f64::max)
}

fn centroid<O: Term>(output: &LinguisticVariable<O>, caps: &[f64], resolution: usize) -> Option<f64> {
    let resolution = resolution.max(MIN_RESOLUTION);
    let (lo, hi) = output.domain();
    let step = (hi - lo) / (resolution - 1) as f64;

    let mut weighted = 0.0;
    let mut total = 0.0;
    for i in 0..resolution {
        let x = lo + step * i as f64;
        let height = aggregated_height(output, caps, x);
        weighted += x * height;
        total += height;
    }

    if total > 0.0 {
        Some(weighted / total)
    } else {
        None
    }
}

fn mean_of_maxima<O: Term>(output: &LinguisticVariable<O>, caps: &[f64]) -> Option<f64> {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (&term, &cap) in O::ALL.iter().zip(caps) {
        if let Some(function) = output.membership(term) {
            weighted += function.representative() * cap;
            total += cap;
        }
    }

    if total > 0.0 {
        Some(weighted / total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::membership::MembershipFunction;

    crate::fuzzy_terms! {
        enum HeadRot { RotNegDir, NoRot, RotPosDir }
    }

    fn head_rotation() -> LinguisticVariable<HeadRot> {
        LinguisticVariable::builder()
            .term(
                HeadRot::RotNegDir,
                MembershipFunction::left_shoulder(-20.0, -20.0, 0.0, 20.0).unwrap(),
            )
            .term(
                HeadRot::NoRot,
                MembershipFunction::triangular(-20.0, 0.0, 20.0).unwrap(),
            )
            .term(
                HeadRot::RotPosDir,
                MembershipFunction::right_shoulder(-20.0, 0.0, 20.0, 20.0).unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_symmetric_single_term_centers_on_peak() {
        let mut merged = FuzzyValueStore::new();
        merged.set(HeadRot::NoRot, 0.7).unwrap();

        let crisp = Defuzzer::default()
            .defuzzify(&head_rotation(), &merged)
            .unwrap();
        assert!(crisp.abs() < 1e-9, "crisp = {}", crisp);
    }

    #[test]
    fn test_pushes_toward_fired_side() {
        let mut merged = FuzzyValueStore::new();
        merged.set(HeadRot::NoRot, 0.2).unwrap();
        merged.set(HeadRot::RotPosDir, 0.9).unwrap();

        let crisp = Defuzzer::default()
            .defuzzify(&head_rotation(), &merged)
            .unwrap();
        assert!(crisp > 0.0 && crisp < 20.0);
    }

    #[test]
    fn test_zero_weight_is_none() {
        let merged = FuzzyValueStore::new();
        assert_eq!(Defuzzer::default().defuzzify(&head_rotation(), &merged), None);

        let mut zeros = FuzzyValueStore::new();
        for &term in HeadRot::ALL {
            zeros.set(term, 0.0).unwrap();
        }
        assert_eq!(Defuzzer::MeanOfMaxima.defuzzify(&head_rotation(), &zeros), None);
    }

    #[test]
    fn test_mean_of_maxima() {
        let mut merged = FuzzyValueStore::new();
        merged.set(HeadRot::NoRot, 0.5).unwrap();
        merged.set(HeadRot::RotPosDir, 0.5).unwrap();

        // Представители: 0 и 20
        let crisp = Defuzzer::MeanOfMaxima
            .defuzzify(&head_rotation(), &merged)
            .unwrap();
        assert!((crisp - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolution_validation() {
        assert_eq!(
            Defuzzer::centroid(1).validate(),
            Err(FuzzyError::InvalidResolution)
        );
        assert_eq!(Defuzzer::centroid(2).validate(), Ok(()));
        assert_eq!(Defuzzer::MeanOfMaxima.validate(), Ok(()));
    }
}
