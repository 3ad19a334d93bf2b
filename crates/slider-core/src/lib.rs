pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod frame;
pub mod input;
pub mod slider;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use events::*;
pub use frame::*;
pub use input::*;
pub use slider::*;
