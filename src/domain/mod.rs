//! Plain data shared between the actors, the HTTP surface and configuration.

pub mod site;
pub mod status;

pub use site::*;
pub use status::*;
