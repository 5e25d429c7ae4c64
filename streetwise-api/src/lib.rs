#![doc = include_str!("../README.md")]
pub mod agent;
pub mod ca;
pub mod client;
pub mod error;
pub mod info;
pub mod token;
pub mod types;
pub mod us;

pub use crate::error::{Error, Result};
