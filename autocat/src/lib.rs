pub mod autocat_serde;
pub mod categorizer;
pub mod error;
pub mod executable_utils;
pub mod filter;
pub mod model;
pub mod presets;
pub mod processor;
pub mod scorers;
pub mod storage;
