pub mod cancel;
pub mod connection;
pub mod dialect;
pub mod options;
pub mod transaction;

#[cfg(all(test, feature = "sqlite"))]
mod tests;
