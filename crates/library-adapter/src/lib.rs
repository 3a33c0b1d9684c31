//! # Local Library Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP)
//! - `repository/` - Persistence implementations

pub mod controller;
pub mod repository;
