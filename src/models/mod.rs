//! Database models shared across the wardrobe repository.

#[cfg(feature = "server")]
pub mod auth;
pub mod clothing_item;
#[cfg(feature = "server")]
pub mod config;
pub mod favorite;
pub mod occasion;
pub mod user;
