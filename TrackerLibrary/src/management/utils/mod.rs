pub mod bounding_box;
pub mod run_guard;
pub mod run_parameters;
pub mod run_state;
