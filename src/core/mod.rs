pub mod app;
pub mod config;
pub mod error;
pub mod index;
pub mod patterns;
pub mod tree;
