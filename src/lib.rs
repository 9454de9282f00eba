//! Classify sustainability report lines against the 17 UN Sustainable
//! Development Goals and summarise which goals a yearly report achieves.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
