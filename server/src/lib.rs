//! HTTP surface of the site: shader sources, weather for the clouds sketch,
//! and server-rendered SVG sketches.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod shaders;
pub mod sketches;
pub mod state;
pub mod svg;
pub mod weather;

pub use config::Args;
pub use error::ServerError;
pub use state::AppState;
