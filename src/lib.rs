pub mod article;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod outputs;
pub mod utils;
