//! Infrastructure layer - Store backends, error handlers, and services

pub mod error_handlers;
pub mod services;
pub mod store;
