mod app;
mod config;
mod hammer;
mod http;
mod run;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use hammer::{HammerError, ThrowError};
pub use http::HttpError;
pub use run::RunError;
pub use validation::ValidationError;
