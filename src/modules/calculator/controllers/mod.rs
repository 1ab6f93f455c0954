pub mod calculator_controller;

pub use calculator_controller::{configure_calculator_routes, CalculationRequest, CalculationResponse};
