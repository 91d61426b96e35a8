//! Object configuration store

pub mod toml_store;

pub use toml_store::TomlConfigStore;
