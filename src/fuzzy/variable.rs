//! Лингвистические переменные (нечеткие множества над одним скалярным доменом)

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::config::engine::capacity::MAX_TERMS;
use crate::error::FuzzyError;
use crate::fuzzy::membership::MembershipFunction;
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;

/// Лингвистическая переменная: каждому терму перечисления `T`
/// сопоставлена ровно одна функция принадлежности
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable<T: Term> {
    /// Функции в порядке `T::ALL`
    functions: Vec<MembershipFunction>,
    domain: (f64, f64),
    _terms: PhantomData<T>,
}

impl<T: Term> LinguisticVariable<T> {
    pub fn builder() -> VariableBuilder<T> {
        VariableBuilder {
            functions: T::ALL.iter().map(|_| None).collect(),
            _terms: PhantomData,
        }
    }

    /// Фаззификация: степень каждого терма записывается в хранилище
    ///
    /// Затрагиваются только ключи этой переменной, прежние значения перезаписываются.
    /// При `StoreFull` хранилище не меняется.
    pub fn fuzzify(&self, x: f64, store: &mut FuzzyValueStore) -> Result<(), FuzzyError> {
        let new_keys = T::ALL.iter().filter(|&&term| !store.contains(term)).count();
        if new_keys > store.remaining() {
            return Err(FuzzyError::StoreFull);
        }

        for &term in T::ALL {
            store.set(term, self.degree(term, x))?;
        }
        Ok(())
    }

    /// Степень принадлежности `x` терму `term`
    pub fn degree(&self, term: T, x: f64) -> f64 {
        self.membership(term).map_or(0.0, |function| function.evaluate(x))
    }

    pub fn membership(&self, term: T) -> Option<&MembershipFunction> {
        self.functions.get(term.index())
    }

    /// Объединение областей определения всех термов
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Середина области определения
    pub fn midpoint(&self) -> f64 {
        (self.domain.0 + self.domain.1) / 2.0
    }
}

/// Построитель лингвистической переменной
#[derive(Debug, Clone)]
pub struct VariableBuilder<T: Term> {
    functions: Vec<Option<MembershipFunction>>,
    _terms: PhantomData<T>,
}

impl<T: Term> VariableBuilder<T> {
    /// Назначение функции терму; повторный вызов заменяет функцию
    pub fn term(mut self, term: T, function: MembershipFunction) -> Self {
        if let Some(slot) = self.functions.get_mut(term.index()) {
            *slot = Some(function);
        }
        self
    }

    /// Сборка переменной; каждый терм должен иметь функцию
    pub fn build(self) -> Result<LinguisticVariable<T>, FuzzyError> {
        if T::ALL.is_empty() {
            return Err(FuzzyError::NoTerms {
                variable: T::variable_name(),
            });
        }
        if T::ALL.len() > MAX_TERMS {
            return Err(FuzzyError::TooManyTerms {
                variable: T::variable_name(),
            });
        }

        let mut functions = Vec::with_capacity(self.functions.len());
        for (&term, function) in T::ALL.iter().zip(self.functions) {
            let function = function.ok_or(FuzzyError::MissingMembership {
                variable: T::variable_name(),
                term: term.name(),
            })?;
            functions.push(function);
        }

        let domain = functions
            .iter()
            .map(MembershipFunction::domain)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (min, max)| {
                (lo.min(min), hi.max(max))
            });

        Ok(LinguisticVariable {
            functions,
            domain,
            _terms: PhantomData,
        })
    }
}
