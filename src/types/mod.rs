//! Type definitions for the endpoint configuration
//!
//! This module contains the data structures shared by the codec and the client.

pub mod endpoints;

pub use endpoints::{Configuration, EndpointField};
