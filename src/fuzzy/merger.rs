//! Слияние выходов правил по термам выходной переменной

use crate::error::FuzzyError;
use crate::fuzzy::rule::FuzzyValue;
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;
use crate::utils::math::clamp_degree;

/// Способ объединения правил с одинаковым заключением
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Merger {
    /// Максимум (ИЛИ по Мамдани)
    #[default]
    Max,
    /// Сумма, ограниченная единицей
    CappedSum,
}

impl Merger {
    /// Запись слитых степеней всех термов `O` в хранилище
    ///
    /// Термы без сработавших правил получают 0. Результат не зависит
    /// от порядка правил.
    pub fn merge<O: Term>(
        self,
        outputs: &[FuzzyValue<O>],
        into: &mut FuzzyValueStore,
    ) -> Result<(), FuzzyError> {
        for &term in O::ALL {
            into.set(term, 0.0)?;
        }

        for output in outputs {
            let current = into.get(output.term).unwrap_or(0.0);
            let degree = clamp_degree(output.degree);
            let merged = match self {
                Merger::Max => current.max(degree),
                Merger::CappedSum => current + degree,
            };
            into.set(output.term, merged)?;
        }

        Ok(())
    }
}
