// Repository ports implemented by the infrastructure layer

pub mod category_repository;
pub mod newsletter_repository;
pub mod product_repository;
pub mod profile_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use newsletter_repository::NewsLetterRepository;
pub use product_repository::ProductRepository;
pub use profile_repository::ProfileRepository;
pub use user_repository::UserRepository;
