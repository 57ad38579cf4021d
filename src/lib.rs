pub mod config;
pub mod constants;
pub mod math_utils;
pub mod saturation;
pub mod sim;
