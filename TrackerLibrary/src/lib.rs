pub mod actuator;
pub mod control;
pub mod detection;
pub mod management;
pub mod utils;
pub mod web;
