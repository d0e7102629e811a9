//! Infrastructure services

mod gateway;
mod resolver;

pub use gateway::QueryGateway;
pub use resolver::QueryResolver;
