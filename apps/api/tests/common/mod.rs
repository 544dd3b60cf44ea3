//! In-memory repositories so the router can be exercised without PostgreSQL

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use funko_shop_api::api::AppState;
use funko_shop_api::domain::category::{Category, NewCategory};
use funko_shop_api::domain::errors::{RepositoryError, RepositoryResult};
use funko_shop_api::domain::newsletter::{NewNewsLetter, NewsLetter};
use funko_shop_api::domain::pagination::{Page, PageRequest};
use funko_shop_api::domain::product::{NewProduct, Product};
use funko_shop_api::domain::profile::{NewProfile, Profile};
use funko_shop_api::domain::repositories::{
    CategoryRepository, NewsLetterRepository, ProductRepository, ProfileRepository,
    UserRepository,
};
use funko_shop_api::domain::user::{NewUser, User};
use funko_shop_api::domain::value_objects::Email;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Shared table store with a per-table id sequence
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn paginate(mut rows: Vec<Product>, page: PageRequest) -> Page<Product> {
    rows.sort_by_key(|p| p.id);
    let total = rows.len() as u64;
    let content = rows
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.size() as usize)
        .collect();
    Page::new(content, page, total)
}

#[derive(Clone, Default)]
pub struct InMemoryCategories(Arc<Mutex<Table<Category>>>);

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let mut rows = self.0.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>> {
        Ok(self.0.lock().unwrap().rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn create(&self, category: NewCategory) -> RepositoryResult<Category> {
        let mut table = self.0.lock().unwrap();
        let created = Category {
            id: table.next_id(),
            name: category.name,
            image_hash: category.image_hash,
            highlights: category.highlights,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> RepositoryResult<Category> {
        let mut table = self.0.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| RepositoryError::Database("no rows returned".into()))?;
        *row = category.clone();
        Ok(category.clone())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.0.lock().unwrap().rows.iter().any(|c| c.id == id))
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.0.lock().unwrap().rows.retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProducts(Arc<Mutex<Table<Product>>>);

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_all(&self, page: PageRequest) -> RepositoryResult<Page<Product>> {
        Ok(paginate(self.0.lock().unwrap().rows.clone(), page))
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> RepositoryResult<Page<Product>> {
        let keyword = keyword.to_lowercase();
        let rows = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&keyword))
            .cloned()
            .collect();
        Ok(paginate(rows, page))
    }

    async fn find_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> RepositoryResult<Page<Product>> {
        let rows = self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect();
        Ok(paginate(rows, page))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        Ok(self.0.lock().unwrap().rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: NewProduct) -> RepositoryResult<Product> {
        let mut table = self.0.lock().unwrap();
        let created = Product {
            id: table.next_id(),
            name: product.name,
            image_hash: product.image_hash,
            image_hash2: product.image_hash2,
            description: product.description,
            price: product.price,
            stock: product.stock,
            discount: product.discount,
            category_id: product.category_id,
            created_at: Utc::now(),
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> RepositoryResult<Product> {
        let mut table = self.0.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| RepositoryError::Database("no rows returned".into()))?;
        *row = product.clone();
        Ok(product.clone())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.0.lock().unwrap().rows.iter().any(|p| p.id == id))
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.0.lock().unwrap().rows.retain(|p| p.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProfiles(Arc<Mutex<Table<Profile>>>);

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_all(&self) -> RepositoryResult<Vec<Profile>> {
        Ok(self.0.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Profile>> {
        Ok(self.0.lock().unwrap().rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, profile: NewProfile) -> RepositoryResult<Profile> {
        let mut table = self.0.lock().unwrap();
        let created = Profile {
            id: table.next_id(),
            name: profile.name,
            email: profile.email,
            address: profile.address,
            city: profile.city,
            postal_code: profile.postal_code,
            phone: profile.phone,
            created_at: Utc::now(),
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, profile: &Profile) -> RepositoryResult<Profile> {
        let mut table = self.0.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| RepositoryError::Database("no rows returned".into()))?;
        *row = profile.clone();
        Ok(profile.clone())
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.0.lock().unwrap().rows.iter().any(|p| p.id == id))
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.0.lock().unwrap().rows.retain(|p| p.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryNewsLetters(Arc<Mutex<Table<NewsLetter>>>);

#[async_trait]
impl NewsLetterRepository for InMemoryNewsLetters {
    async fn exists_by_email(&self, email: &Email) -> RepositoryResult<bool> {
        Ok(self.0.lock().unwrap().rows.iter().any(|n| &n.email == email))
    }

    async fn find_by_code(&self, code: &str) -> RepositoryResult<Option<NewsLetter>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|n| n.code == code)
            .cloned())
    }

    async fn create(&self, news_letter: NewNewsLetter) -> RepositoryResult<NewsLetter> {
        let mut table = self.0.lock().unwrap();
        let created = NewsLetter {
            id: table.next_id(),
            code: news_letter.code,
            email: news_letter.email,
            created_at: Utc::now(),
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.0.lock().unwrap().rows.retain(|n| n.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUsers(Arc<Mutex<Table<User>>>);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> RepositoryResult<User> {
        let mut table = self.0.lock().unwrap();
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::UniqueViolation(
                "users_email_key".to_string(),
            ));
        }
        let created = User {
            id: table.next_id(),
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        Ok(self.0.lock().unwrap().rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

/// User store whose every call fails like a lost database connection
#[derive(Default)]
pub struct UnavailableUsers;

#[async_trait]
impl UserRepository for UnavailableUsers {
    async fn create(&self, _user: NewUser) -> RepositoryResult<User> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> RepositoryResult<Option<User>> {
        Err(unavailable())
    }

    async fn find_by_email(&self, _email: &Email) -> RepositoryResult<Option<User>> {
        Err(unavailable())
    }
}

fn unavailable() -> RepositoryError {
    RepositoryError::Database("connection refused to db.internal:5432".to_string())
}

/// Application state over fresh, empty in-memory tables
pub fn in_memory_state() -> AppState {
    AppState {
        categories: Arc::new(InMemoryCategories::default()),
        products: Arc::new(InMemoryProducts::default()),
        profiles: Arc::new(InMemoryProfiles::default()),
        news_letters: Arc::new(InMemoryNewsLetters::default()),
        users: Arc::new(InMemoryUsers::default()),
        jwt_secret: Arc::from(TEST_SECRET),
    }
}
