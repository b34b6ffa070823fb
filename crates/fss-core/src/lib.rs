pub mod archive;
pub mod bridge;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod scene;
pub mod studio;

pub use archive::*;
pub use bridge::*;
pub use codec::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use registry::*;
pub use scene::*;
pub use studio::*;
