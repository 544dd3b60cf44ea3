//! Funko Shop API Library
//!
//! Catalogue (products, categories), customer profiles and newsletter
//! signups served over HTTP, layered as domain, services, infrastructure
//! and API adapters.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod dto;
pub mod infrastructure;
pub mod services;
