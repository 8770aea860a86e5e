pub mod handlers;
pub mod models;
pub mod persistence;
pub mod store;

#[cfg(test)]
mod mod_tests;
