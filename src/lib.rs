// transgate - provider-agnostic machine translation gateway
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod languages;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod server;
pub mod utils;
