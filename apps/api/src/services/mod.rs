// Service layer
// Validates input, orchestrates repositories and maps entities to DTOs

pub mod category_service;
pub mod newsletter_service;
pub mod product_service;
pub mod profile_service;

pub use category_service::CategoryService;
pub use newsletter_service::NewsLetterService;
pub use product_service::ProductService;
pub use profile_service::ProfileService;
