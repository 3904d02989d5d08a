//! Route Handlers
//!
//! HTTP request handlers for all routes.

pub mod about;
pub mod demo;
pub mod errors;
pub mod health;
pub mod home;
pub mod rbe;
pub mod statics;
pub mod topics;
