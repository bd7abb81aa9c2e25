//! Application services.

mod temp_model_bridge;

pub use temp_model_bridge::TempModelBridge;
