pub mod artists;
pub mod config;
pub mod error;
mod http_layers;
pub mod locale;
pub mod pages;
pub mod proxy;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use http_layers::*;
pub use proxy::ArtistApiProxy;
pub use server::{make_app, run_server};
