pub mod config;

pub use config::ReduceConfig;
