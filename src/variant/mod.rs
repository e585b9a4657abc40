pub mod presets;
pub mod variant;
