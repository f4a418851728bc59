//! DTO modules that bridge services with the JSON API and the CLIs.

pub mod favorite;
pub mod occasion;
pub mod suggestion;
pub mod user;
