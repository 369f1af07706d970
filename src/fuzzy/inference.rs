//! Проход нечеткого вывода по одной выходной переменной

use crate::error::FuzzyError;
use crate::fuzzy::diagnostics::RuleReport;
use crate::fuzzy::rule::{FuzzyValue, RuleOutputs};
use crate::fuzzy::rule_set::RuleSet;
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;

/// Результат одного прохода
#[derive(Debug, Clone)]
pub struct Inference<O: Term> {
    /// Четкое значение выходной переменной
    pub crisp: f64,
    /// Сила каждого правила в порядке правил
    pub rule_outputs: RuleOutputs<O>,
    /// Ни одно правило не сработало, применен запасной вариант
    pub fallback_used: bool,
}

/// Канал вывода: набор правил и его собственные рабочие буферы
///
/// Буфер слияния принадлежит каналу, поэтому независимые каналы
/// делят между собой только входное хранилище (по ссылке на чтение).
#[derive(Debug, Clone)]
pub struct InferenceChannel<O: Term> {
    rule_set: RuleSet<O>,
    merged: FuzzyValueStore,
    rule_outputs: RuleOutputs<O>,
    last_output: Option<f64>,
}

impl<O: Term> InferenceChannel<O> {
    pub fn new(rule_set: RuleSet<O>) -> Self {
        Self {
            rule_set,
            merged: FuzzyValueStore::new(),
            rule_outputs: RuleOutputs::new(),
            last_output: None,
        }
    }

    /// Вывод по уже фаззифицированным входам
    pub fn run(&mut self, inputs: &FuzzyValueStore) -> Result<f64, FuzzyError> {
        let inference = self
            .rule_set
            .infer(inputs, &mut self.merged, self.last_output)?;

        trace!("{} = {}", O::variable_name(), inference.crisp);

        self.rule_outputs = inference.rule_outputs;
        self.last_output = Some(inference.crisp);
        Ok(inference.crisp)
    }

    pub fn rule_set(&self) -> &RuleSet<O> {
        &self.rule_set
    }

    /// Слитые степени последнего прохода
    pub fn merged(&self) -> &FuzzyValueStore {
        &self.merged
    }

    /// Сила правил последнего прохода
    pub fn rule_outputs(&self) -> &[FuzzyValue<O>] {
        &self.rule_outputs
    }

    pub fn last_output(&self) -> Option<f64> {
        self.last_output
    }

    /// Отчет по правилам последнего прохода
    pub fn report(&self) -> RuleReport<'_, O> {
        RuleReport::new(self.rule_set.rules(), &self.rule_outputs)
    }

    /// Сброс памяти канала
    pub fn reset(&mut self) {
        self.merged.clear();
        self.rule_outputs.clear();
        self.last_output = None;
    }
}
