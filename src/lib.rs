//! Нечеткий вывод по Мамдани для контуров управления
//!
//! Конвейер одного такта:
//! фаззификация входов -> оценка правил -> слияние по выходным термам -> дефаззификация.
//!
//! Конфигурация (переменные, правила) собирается один раз и живет в `alloc`,
//! рабочие буферы такта имеют фиксированную емкость (`heapless`).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Должен идти первым: макросы логирования видны только в модулях ниже
mod fmt;

pub mod config;
pub mod control;
pub mod data;
pub mod error;
pub mod fuzzy;
pub mod utils;

pub use error::FuzzyError;
pub use fuzzy::{
    Defuzzer, Evaluator, Expr, Fallback, FuzzyValue, FuzzyValueStore, InferenceChannel,
    LinguisticVariable, Merger, MembershipFunction, Point, Rule, RuleSet, Term,
};
