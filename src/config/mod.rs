//! Configuration: environment-driven settings plus the constants
//! (role names, password policy, defaults) shared across layers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
