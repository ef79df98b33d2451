pub mod clean;
pub mod config;
pub mod inspect;
pub mod patterns;
