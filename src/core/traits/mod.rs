pub mod listener;

pub use listener::RevenueListener;
