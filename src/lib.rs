#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use auth::{Credentials, DigestAuth};
pub use client::{ApiError, Client, Response};
pub use config::ClientConfig;
