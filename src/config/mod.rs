//! Конфигурация движка и эталонных контроллеров

pub mod controllers;
pub mod engine;
