// HTTP handlers, one module per resource

pub mod auth;
pub mod categories;
pub mod health;
pub mod newsletters;
pub mod products;
pub mod profiles;
