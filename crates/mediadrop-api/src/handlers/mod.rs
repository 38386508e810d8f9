//! HTTP handlers, one module per route group.

pub mod auth;
pub mod gallery;
pub mod health;
pub mod media_list;
pub mod share;
pub mod upload;
pub mod users;
