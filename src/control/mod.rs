//! Эталонные нечеткие контроллеры

pub mod balance;
pub mod three_way;
pub mod vehicle;

pub use balance::BalanceController;
pub use vehicle::VehicleController;
