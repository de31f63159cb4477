//! Core library for the Aviary service client.

pub mod auth;
pub mod config;
