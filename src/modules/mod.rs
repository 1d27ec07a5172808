//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for background job dispatch and email delivery.

pub mod mail;
pub mod queue;
