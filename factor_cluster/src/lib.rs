//! Requests for changing cluster-wide index metadata.
//!
//! A request is built by the service that wants a change applied and then
//! handed over, by value, to the cluster state coordinator.

pub type AnyError = anyhow::Error;

pub mod data;
pub mod error;
pub mod request;

pub mod prelude;
