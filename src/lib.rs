// mt2native - Literal machine translation refined into native-sounding text

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod utils;
