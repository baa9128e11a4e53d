pub mod interactive;
pub mod presets;
pub mod solve;
