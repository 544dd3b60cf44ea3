// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_category_repository;
pub mod postgres_newsletter_repository;
pub mod postgres_product_repository;
pub mod postgres_profile_repository;
pub mod postgres_user_repository;

pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_newsletter_repository::PostgresNewsLetterRepository;
pub use postgres_product_repository::PostgresProductRepository;
pub use postgres_profile_repository::PostgresProfileRepository;
pub use postgres_user_repository::PostgresUserRepository;
