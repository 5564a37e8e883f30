// Library exports for testing
pub mod chime;
pub mod compose;
pub mod config;
pub mod constants;
pub mod enhance;
pub mod gradient;
pub mod icons;
pub mod mask;
pub mod synth;
