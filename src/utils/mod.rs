//! Вспомогательные функции

pub mod math;
