//! Server-side delegation into chef-core

pub mod chef;
pub mod config;
