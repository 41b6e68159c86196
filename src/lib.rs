pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod routes;
pub mod signing;
pub mod turnstile;
