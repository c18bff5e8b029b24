//! Core types and trait definitions for the todo list service.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! (`todo-store-sqlite`) and the REST layer (`todo-api`) both depend on it.

pub mod error;
pub mod item;
pub mod list;
pub mod store;

pub use error::{Error, Result};
