//! Manifest Persistence - JSON 清单存储

mod json_store;

pub use json_store::JsonManifestStore;
