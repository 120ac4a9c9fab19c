//! Network layer: REST helpers for the server's proxy routes.

pub mod api;
