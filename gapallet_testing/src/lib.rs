pub mod backend;

pub use axum::http::StatusCode;
