//! Domain aggregates exposed by the wardrobe service layer.

pub mod clothing_item;
pub mod occasion;
pub mod suggestion;
pub mod types;
pub mod user;
