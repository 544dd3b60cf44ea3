/// Product category as stored in the `categories` table
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image_hash: Option<String>,
    pub highlights: bool,
}

/// Category data before the database has assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub image_hash: Option<String>,
    pub highlights: bool,
}
