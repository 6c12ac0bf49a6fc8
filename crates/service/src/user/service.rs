use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument};

use super::dto::{UserCreateDto, UserDto, UserUpdateDto};
use super::mapper;
use super::repository::UserRepository;
use super::rules;
use crate::errors::ServiceError;

/// User service configuration
#[derive(Clone, Debug)]
pub struct UserConfig {
    pub min_age: u32,
}

impl Default for UserConfig {
    fn default() -> Self { Self { min_age: 18 } }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// User business service independent of web framework
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    cfg: UserConfig,
    today: fn() -> NaiveDate,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>, cfg: UserConfig) -> Self {
        Self { repo, cfg, today: utc_today }
    }

    /// Replace the clock used for age checks.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Create a user after checking the minimum age.
    ///
    /// # Examples
    /// ```
    /// use service::user::{UserService, UserConfig, repository::mock::MockUserRepository, dto::UserCreateDto};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()), UserConfig::default());
    /// let dto = UserCreateDto {
    ///     email: "ada@example.com".into(),
    ///     first_name: "Ada".into(),
    ///     last_name: "Lovelace".into(),
    ///     birth_date: chrono::NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
    ///     address: None,
    ///     phone_number: None,
    /// };
    /// let user = tokio_test::block_on(svc.create(dto)).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn create(&self, dto: UserCreateDto) -> Result<UserDto, ServiceError> {
        rules::ensure_min_age(dto.birth_date, (self.today)(), self.cfg.min_age)?;
        let created = self.repo.insert(mapper::to_new_user(dto)).await?;
        info!(user_id = created.id, "user_created");
        Ok(mapper::to_dto(created))
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, ServiceError> {
        let users = self.repo.list_active().await?;
        debug!(count = users.len(), "users listed");
        Ok(users.into_iter().map(mapper::to_dto).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserDto, ServiceError> {
        let user = self.repo.find_active(id).await?.ok_or_else(|| ServiceError::not_found("user", id))?;
        Ok(mapper::to_dto(user))
    }

    /// Merge the present fields of `dto` into the stored user.
    /// A new birth date is age-checked before any field is written.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: UserUpdateDto) -> Result<UserDto, ServiceError> {
        let mut user = self.repo.find_active(id).await?.ok_or_else(|| ServiceError::not_found("user", id))?;
        let patch = mapper::to_patch(dto);
        if let Some(birth_date) = patch.birth_date {
            rules::ensure_min_age(birth_date, (self.today)(), self.cfg.min_age)?;
        }
        user.apply(patch);
        let saved = self.repo.save(user).await?;
        info!(user_id = saved.id, "user_updated");
        Ok(mapper::to_dto(saved))
    }

    /// Soft delete; unknown or already deleted ids are a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.soft_delete(id).await? {
            info!(user_id = id, "user_deleted");
        } else {
            debug!(user_id = id, "delete skipped: no live user");
        }
        Ok(())
    }

    /// Live users born within `[from, to]`.
    #[instrument(skip(self))]
    pub async fn search_by_birth_date(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<UserDto>, ServiceError> {
        rules::ensure_range(from, to)?;
        let users = self.repo.list_active_born_between(from, to).await?;
        Ok(users.into_iter().map(mapper::to_dto).collect())
    }
}
