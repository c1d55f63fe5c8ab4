pub mod config;
pub mod data_storage;
pub mod import;
pub mod messages;
pub mod view;
