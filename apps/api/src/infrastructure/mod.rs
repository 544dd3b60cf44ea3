// Infrastructure layer module
// Database adapters, pool setup and migrations

pub mod database;
pub mod repositories;
