// Domain layer module exports
// Entities, value objects and repository ports; no infrastructure concerns

pub mod category;
pub mod errors;
pub mod newsletter;
pub mod pagination;
pub mod product;
pub mod profile;
pub mod repositories;
pub mod user;
pub mod value_objects;
