//! Набор правил одной выходной переменной

use alloc::vec::Vec;

use crate::config::engine::capacity::MAX_RULES;
use crate::error::FuzzyError;
use crate::fuzzy::defuzzer::Defuzzer;
use crate::fuzzy::evaluator::Evaluator;
use crate::fuzzy::inference::Inference;
use crate::fuzzy::merger::Merger;
use crate::fuzzy::rule::{FuzzyValue, Rule, RuleOutputs};
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;
use crate::fuzzy::variable::LinguisticVariable;

/// Выход, когда ни одно правило не сработало
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fallback {
    /// Середина области выходной переменной
    #[default]
    Midpoint,
    /// Фиксированное значение
    Value(f64),
    /// Предыдущее значение канала (середина области на первом такте)
    HoldPrevious,
}

/// Выходная переменная, ее правила и стратегии вывода
///
/// Строится один раз при конфигурации и не меняется между тактами.
#[derive(Debug, Clone)]
pub struct RuleSet<O: Term> {
    output: LinguisticVariable<O>,
    rules: Vec<Rule<O>>,
    evaluator: Evaluator,
    merger: Merger,
    defuzzer: Defuzzer,
    fallback: Fallback,
}

impl<O: Term> RuleSet<O> {
    /// Набор с настройками по умолчанию: минимум/максимум, слияние по максимуму,
    /// центр тяжести, середина области при отсутствии срабатываний
    pub fn new(output: LinguisticVariable<O>, rules: Vec<Rule<O>>) -> Result<Self, FuzzyError> {
        if rules.len() > MAX_RULES {
            return Err(FuzzyError::TooManyRules);
        }

        debug!(
            "Набор правил {}: {} правил",
            O::variable_name(),
            rules.len()
        );

        Ok(Self {
            output,
            rules,
            evaluator: Evaluator::default(),
            merger: Merger::default(),
            defuzzer: Defuzzer::default(),
            fallback: Fallback::default(),
        })
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_merger(mut self, merger: Merger) -> Self {
        self.merger = merger;
        self
    }

    pub fn with_defuzzer(mut self, defuzzer: Defuzzer) -> Result<Self, FuzzyError> {
        defuzzer.validate()?;
        self.defuzzer = defuzzer;
        Ok(self)
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn output(&self) -> &LinguisticVariable<O> {
        &self.output
    }

    pub fn rules(&self) -> &[Rule<O>] {
        &self.rules
    }

    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    pub fn merger(&self) -> Merger {
        self.merger
    }

    pub fn defuzzer(&self) -> Defuzzer {
        self.defuzzer
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Сила срабатывания каждого правила
    pub fn evaluate(&self, inputs: &FuzzyValueStore) -> Result<RuleOutputs<O>, FuzzyError> {
        self.evaluator.evaluate_rules(&self.rules, inputs)
    }

    /// Слияние выходов правил в буфер выходной переменной
    pub fn merge(
        &self,
        outputs: &[FuzzyValue<O>],
        merged: &mut FuzzyValueStore,
    ) -> Result<(), FuzzyError> {
        self.merger.merge(outputs, merged)
    }

    /// Четкое значение с учетом политики `Fallback`
    ///
    /// Возвращает значение и признак того, что сработал запасной вариант.
    pub fn defuzzify(&self, merged: &FuzzyValueStore, previous: Option<f64>) -> (f64, bool) {
        match self.defuzzer.defuzzify(&self.output, merged) {
            Some(value) => (value, false),
            None => {
                let value = match self.fallback {
                    Fallback::Midpoint => self.output.midpoint(),
                    Fallback::Value(value) => value,
                    Fallback::HoldPrevious => previous.unwrap_or_else(|| self.output.midpoint()),
                };
                warn!(
                    "{}: ни одно правило не сработало, выход {}",
                    O::variable_name(),
                    value
                );
                (value, true)
            }
        }
    }

    /// Полный проход: правила -> слияние -> дефаззификация
    pub fn infer(
        &self,
        inputs: &FuzzyValueStore,
        merged: &mut FuzzyValueStore,
        previous: Option<f64>,
    ) -> Result<Inference<O>, FuzzyError> {
        let rule_outputs = self.evaluate(inputs)?;
        self.merge(&rule_outputs, merged)?;
        let (crisp, fallback_used) = self.defuzzify(merged, previous);

        Ok(Inference {
            crisp,
            rule_outputs,
            fallback_used,
        })
    }
}
