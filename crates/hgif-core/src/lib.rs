pub mod agent;
pub mod app;
pub mod auto;
pub mod config;
pub mod constants;
pub mod device;
pub mod driver;
pub mod error;
pub mod export;
pub mod log_book;
pub mod playback;
pub mod recording;
pub mod render;
pub mod repeat;
pub mod strategy;
pub mod surface;

pub use agent::*;
pub use app::*;
pub use auto::*;
pub use config::*;
pub use constants::*;
pub use device::*;
pub use driver::*;
pub use error::*;
pub use export::*;
pub use log_book::*;
pub use playback::*;
pub use recording::*;
pub use render::*;
pub use repeat::*;
pub use strategy::*;
pub use surface::*;
