pub mod debt_controller;

pub use debt_controller::configure;
