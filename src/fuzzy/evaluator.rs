//! Стратегии нечетких И/ИЛИ и оценка набора правил

use heapless::Vec;

use crate::error::FuzzyError;
use crate::fuzzy::rule::{Rule, RuleOutputs};
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;
use crate::utils::math::clamp_degree;

/// Пара операторов И/ИЛИ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Evaluator {
    /// И = минимум, ИЛИ = максимум (Заде)
    #[default]
    MinMax,
    /// И = произведение, ИЛИ = вероятностная сумма
    ProductSum,
}

impl Evaluator {
    /// Нечеткое И двух степеней
    #[inline]
    pub fn and(self, a: f64, b: f64) -> f64 {
        let value = match self {
            Evaluator::MinMax => a.min(b),
            Evaluator::ProductSum => a * b,
        };
        clamp_degree(value)
    }

    /// Нечеткое ИЛИ двух степеней
    #[inline]
    pub fn or(self, a: f64, b: f64) -> f64 {
        let value = match self {
            Evaluator::MinMax => a.max(b),
            Evaluator::ProductSum => a + b - a * b,
        };
        clamp_degree(value)
    }

    /// Сила срабатывания каждого правила в порядке правил
    ///
    /// Правила с нулевой силой тоже попадают в результат.
    pub fn evaluate_rules<O: Term>(
        self,
        rules: &[Rule<O>],
        store: &FuzzyValueStore,
    ) -> Result<RuleOutputs<O>, FuzzyError> {
        let mut outputs = Vec::new();
        for rule in rules {
            let output = rule.fire(store, self)?;
            outputs.push(output).map_err(|_| FuzzyError::TooManyRules)?;
        }
        Ok(outputs)
    }
}
