pub mod browse;
pub mod clear;
pub mod config;
pub mod details;
pub mod search;
pub mod watchlist;
