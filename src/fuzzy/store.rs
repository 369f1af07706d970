//! Хранилище степеней принадлежности

use core::any::TypeId;

use heapless::LinearMap;

use crate::config::engine::capacity::MAX_DEGREES;
use crate::error::FuzzyError;
use crate::fuzzy::term::Term;
use crate::utils::math::clamp_degree;

/// Ключ степени: тип перечисления термов + позиция терма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegreeKey {
    variable: TypeId,
    term: usize,
}

impl DegreeKey {
    pub fn of<T: Term>(term: T) -> Self {
        Self {
            variable: TypeId::of::<T>(),
            term: term.index(),
        }
    }
}

/// Степени принадлежности (переменная, терм) -> [0, 1]
///
/// Рабочий буфер такта фиксированной емкости: значения перезаписываются,
/// а не накапливаются, поэтому один экземпляр переиспользуется между тактами.
#[derive(Debug, Clone)]
pub struct FuzzyValueStore {
    degrees: LinearMap<DegreeKey, f64, MAX_DEGREES>,
}

impl FuzzyValueStore {
    pub const fn new() -> Self {
        Self {
            degrees: LinearMap::new(),
        }
    }

    /// Запись степени терма с ограничением в [0, 1]
    pub fn set<T: Term>(&mut self, term: T, degree: f64) -> Result<(), FuzzyError> {
        self.set_key(DegreeKey::of(term), degree)
    }

    pub(crate) fn set_key(&mut self, key: DegreeKey, degree: f64) -> Result<(), FuzzyError> {
        self.degrees
            .insert(key, clamp_degree(degree))
            .map(|_| ())
            .map_err(|_| FuzzyError::StoreFull)
    }

    /// Степень терма, если она была записана
    pub fn get<T: Term>(&self, term: T) -> Option<f64> {
        self.get_key(&DegreeKey::of(term))
    }

    pub(crate) fn get_key(&self, key: &DegreeKey) -> Option<f64> {
        self.degrees.get(key).copied()
    }

    /// Степень терма; отсутствие записи - ошибка связывания переменных и правил
    pub fn degree<T: Term>(&self, term: T) -> Result<f64, FuzzyError> {
        self.get(term).ok_or(FuzzyError::MissingDegree {
            variable: T::variable_name(),
            term: term.name(),
        })
    }

    pub fn contains<T: Term>(&self, term: T) -> bool {
        self.degrees.contains_key(&DegreeKey::of(term))
    }

    /// Удаление всех степеней одной переменной
    pub fn remove_variable<T: Term>(&mut self) {
        for &term in T::ALL {
            self.degrees.remove(&DegreeKey::of(term));
        }
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Сколько новых ключей еще поместится
    pub fn remaining(&self) -> usize {
        MAX_DEGREES - self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn clear(&mut self) {
        self.degrees.clear();
    }
}

impl Default for FuzzyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::fuzzy_terms! {
        enum AxisX { Negative, Zero, Positive }
    }

    crate::fuzzy_terms! {
        enum AxisZ { Negative, Zero, Positive }
    }

    #[test]
    fn test_variables_with_same_term_names_do_not_collide() {
        let mut store = FuzzyValueStore::new();
        store.set(AxisX::Zero, 0.25).unwrap();
        store.set(AxisZ::Zero, 0.75).unwrap();

        assert_eq!(store.get(AxisX::Zero), Some(0.25));
        assert_eq!(store.get(AxisZ::Zero), Some(0.75));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_set_overwrites_and_clamps() {
        let mut store = FuzzyValueStore::new();
        store.set(AxisX::Positive, 0.4).unwrap();
        store.set(AxisX::Positive, 1.5).unwrap();
        assert_eq!(store.get(AxisX::Positive), Some(1.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_degree_is_an_error() {
        let store = FuzzyValueStore::new();
        assert_eq!(
            store.degree(AxisZ::Negative),
            Err(FuzzyError::MissingDegree {
                variable: "AxisZ",
                term: "Negative",
            })
        );
    }

    #[test]
    fn test_remove_variable_keeps_others() {
        let mut store = FuzzyValueStore::new();
        for &term in AxisX::ALL {
            store.set(term, 0.5).unwrap();
        }
        store.set(AxisZ::Zero, 1.0).unwrap();

        store.remove_variable::<AxisX>();
        assert_eq!(store.len(), 1);
        assert!(store.contains(AxisZ::Zero));
        assert!(!store.contains(AxisX::Zero));
    }
}
