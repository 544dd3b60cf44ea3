use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{optional_max_len, require_max_len, require_text};
use crate::domain::errors::ServiceError;
use crate::domain::profile::{NewProfile, Profile};
use crate::domain::value_objects::Email;

pub const NAME_MAX_LENGTH: usize = 255;
pub const ADDRESS_MAX_LENGTH: usize = 255;
pub const CITY_MAX_LENGTH: usize = 120;
pub const POSTAL_CODE_MAX_LENGTH: usize = 20;
pub const PHONE_MAX_LENGTH: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDto {
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProfileDto {
    /// Validates the body and returns the parsed email
    pub fn validate(&self) -> Result<Email, ServiceError> {
        require_text(&self.name, "name")?;
        require_max_len(self.name.trim(), "name", NAME_MAX_LENGTH)?;
        optional_max_len(self.address.as_deref(), "address", ADDRESS_MAX_LENGTH)?;
        optional_max_len(self.city.as_deref(), "city", CITY_MAX_LENGTH)?;
        optional_max_len(self.postal_code.as_deref(), "postal_code", POSTAL_CODE_MAX_LENGTH)?;
        optional_max_len(self.phone.as_deref(), "phone", PHONE_MAX_LENGTH)?;
        Email::new(&self.email).map_err(ServiceError::Validation)
    }

    pub fn to_new_profile(&self, email: Email) -> NewProfile {
        NewProfile {
            name: self.name.trim().to_string(),
            email,
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn apply_to(&self, profile: &mut Profile, email: Email) {
        profile.name = self.name.trim().to_string();
        profile.email = email;
        profile.address = self.address.clone();
        profile.city = self.city.clone();
        profile.postal_code = self.postal_code.clone();
        profile.phone = self.phone.clone();
    }
}

impl From<&Profile> for ProfileDto {
    fn from(profile: &Profile) -> Self {
        Self {
            id: Some(profile.id),
            name: profile.name.clone(),
            email: profile.email.to_string(),
            address: profile.address.clone(),
            city: profile.city.clone(),
            postal_code: profile.postal_code.clone(),
            phone: profile.phone.clone(),
            created_at: Some(profile.created_at),
        }
    }
}
