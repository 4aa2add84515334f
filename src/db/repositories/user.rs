use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use tokio::task;

use crate::entities::users;

/// User data returned from the repository (without the password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            username: model.username,
        }
    }
}

/// Outcome of the admin upsert, used by the CLI for its status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminUpsert {
    Created,
    Updated,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get the sole meaningful user. The app is single-tenant: the admin
    /// upsert never inserts a second row, so "first by id" is the admin.
    pub async fn first(&self) -> Result<Option<User>> {
        let user = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query first user")?;

        Ok(user.map(User::from))
    }

    pub async fn by_id(&self, id: i32) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by id")?;

        Ok(user.map(User::from))
    }

    pub async fn count(&self) -> Result<u64> {
        users::Entity::find()
            .count(&self.conn)
            .await
            .context("Failed to count users")
    }

    /// Verify credentials against the sole user. Returns the user on success,
    /// `None` for a wrong username or wrong password alike so callers cannot
    /// tell which field failed.
    /// Note: argon2 verification is CPU-intensive and runs under
    /// `spawn_blocking` to keep it off the async runtime.
    pub async fn verify_login(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query user for login")?;

        let Some(user) = user else {
            return Ok(None);
        };

        if user.username != username {
            return Ok(None);
        }

        let password_hash = user.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            let argon2 = Argon2::default();
            Ok::<bool, anyhow::Error>(
                argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid.then(|| User::from(user)))
    }

    /// Update the display name of an existing user
    pub async fn update_name(&self, id: i32, name: &str) -> Result<()> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user for name update")?
            .ok_or_else(|| anyhow::anyhow!("User {id} not found"))?;

        let mut active: users::ActiveModel = user.into();
        active.name = Set(name.to_string());
        active.update(&self.conn).await?;

        Ok(())
    }

    /// Create or overwrite the single admin account. Existing user keeps its
    /// display name; a fresh account is named "Admin".
    pub async fn upsert_admin(&self, username: &str, password: &str) -> Result<AdminUpsert> {
        let existing = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query user for admin upsert")?;

        let password = password.to_string();
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .context("Password hashing task panicked")??;

        match existing {
            Some(user) => {
                let mut active: users::ActiveModel = user.into();
                active.username = Set(username.to_string());
                active.password_hash = Set(password_hash);
                active.update(&self.conn).await?;
                Ok(AdminUpsert::Updated)
            }
            None => {
                let active = users::ActiveModel {
                    name: Set("Admin".to_string()),
                    username: Set(username.to_string()),
                    password_hash: Set(password_hash),
                    ..Default::default()
                };
                active.insert(&self.conn).await?;
                Ok(AdminUpsert::Created)
            }
        }
    }
}

/// Hash a password using Argon2id with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))
}
