// Command surface: subcommand definitions and rendering, one module per
// topic. Each `run` receives the resolved settings explicitly; nothing here
// reaches for global state.

pub mod account;
pub mod config;
pub mod droplets;
