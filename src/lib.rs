pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod session;
pub mod text;

#[cfg(test)]
pub mod test_utils;
