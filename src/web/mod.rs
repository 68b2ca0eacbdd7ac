// src/web/mod.rs

/// Request handlers and their wire types.
pub mod api;

/// Router construction and the listening loop.
pub mod server;
