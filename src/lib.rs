//! iconserve - a local preview server for UI icon catalogs.
//!
//! This crate serves a documentation tree over localhost and remaps requests
//! under `/assets/` onto the `UI/Assets` image tree, so the icon catalog page
//! renders with working images during development.

pub mod cli;
pub mod resolve;
pub mod server;
