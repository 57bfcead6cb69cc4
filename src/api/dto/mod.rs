//! Request and response DTOs for the API layer.

pub mod click;
pub mod health;
