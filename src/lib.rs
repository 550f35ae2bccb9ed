pub mod error;
pub mod validation;
pub mod model;
pub mod queries;
pub mod db;
pub mod migrate;
pub mod config;
pub mod cli;
