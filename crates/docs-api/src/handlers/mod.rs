//! HTTP request handlers for the docs API

pub mod admin;
pub mod openapi;
pub mod services;
pub mod swagger_config;
