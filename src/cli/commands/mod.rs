pub mod config;
pub mod pipe;
pub mod scan;
