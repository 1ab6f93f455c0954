pub mod platform_controller;

pub use platform_controller::configure_platform_routes;
