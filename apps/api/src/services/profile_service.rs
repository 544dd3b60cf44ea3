use std::sync::Arc;

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::repositories::ProfileRepository;
use crate::dto::ProfileDto;

/// Customer profile management
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Lists every stored profile
    pub async fn get_all_profiles(&self) -> ServiceResult<Vec<ProfileDto>> {
        let profiles = self.profiles.find_all().await?;
        Ok(profiles.iter().map(ProfileDto::from).collect())
    }

    /// Looks up a single profile
    pub async fn get_profile_by_id(&self, id: i64) -> ServiceResult<ProfileDto> {
        self.profiles
            .find_by_id(id)
            .await?
            .as_ref()
            .map(ProfileDto::from)
            .ok_or(ServiceError::ProfileNotFound(id))
    }

    /// Validates and stores a new profile
    pub async fn create_profile(&self, dto: &ProfileDto) -> ServiceResult<ProfileDto> {
        let email = dto.validate()?;
        let profile = self.profiles.create(dto.to_new_profile(email)).await?;

        tracing::info!(profile_id = profile.id, "Profile created");

        Ok(ProfileDto::from(&profile))
    }

    /// Replaces every editable field of an existing profile
    pub async fn update_profile(&self, id: i64, dto: &ProfileDto) -> ServiceResult<ProfileDto> {
        let email = dto.validate()?;

        let mut profile = self
            .profiles
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ProfileNotFound(id))?;

        dto.apply_to(&mut profile, email);
        let updated = self.profiles.update(&profile).await?;

        Ok(ProfileDto::from(&updated))
    }

    /// Deletes a profile after checking it exists
    pub async fn delete_profile(&self, id: i64) -> ServiceResult<()> {
        if !self.profiles.exists_by_id(id).await? {
            return Err(ServiceError::ProfileNotFound(id));
        }

        self.profiles.delete_by_id(id).await?;
        tracing::info!(profile_id = id, "Profile deleted");

        Ok(())
    }
}
