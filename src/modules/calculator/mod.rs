pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AdLineItem, AdType, CalculationInput, RawCalculationInput, RevenueBreakdown};
pub use services::{compute, parse_number_or_zero, RenderedBreakdown, RevenueCalculator};
