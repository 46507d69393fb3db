/// Application configuration module
pub mod config;
/// Service traits for the two BuiltWith APIs
pub mod interfaces;
/// HTTP-backed service implementations
pub mod services;
