//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use flightops_core::entities::{Profile, User};
use flightops_core::queries::{Page, PageRequest};
use flightops_core::traits::{RepoResult, UserRepository};
use flightops_core::value_objects::Snowflake;

use crate::mappers::{user_with_profile, ProfileInsert, UserInsert, UserUpdate};
use crate::models::{UserModel, UserWithProfileModel};

use super::error::{map_db_error, map_user_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, username, email, role, first_name, last_name, is_active, \
                            password_hash, date_joined";

const USER_PROFILE_COLUMNS: &str = "u.id, u.username, u.email, u.role, u.first_name, \
                                    u.last_name, u.is_active, u.date_joined, \
                                    p.id AS profile_id, p.bio, p.is_verified, \
                                    p.created_at AS profile_created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_with_profile(&self, id: Snowflake) -> RepoResult<Option<(User, Profile)>> {
        let result = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN profiles p ON p.user_id = u.id
            WHERE u.id = $1
            "
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(user_with_profile))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: &PageRequest) -> RepoResult<Page<(User, Profile)>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, UserWithProfileModel>(&format!(
            r"
            SELECT {USER_PROFILE_COLUMNS}
            FROM users u
            JOIN profiles p ON p.user_id = u.id
            ORDER BY u.id
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(user_with_profile).collect(),
            total,
        ))
    }

    #[instrument(skip(self, user, profile, password_hash))]
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
        password_hash: &str,
    ) -> RepoResult<()> {
        let user_insert = UserInsert::new(user, password_hash);
        let profile_insert = ProfileInsert::new(profile);

        // Both rows land or neither does; a user without a profile must never
        // be observable.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO users (id, username, email, role, first_name, last_name,
                               is_active, password_hash, date_joined)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(user_insert.id)
        .bind(user_insert.username)
        .bind(user_insert.email)
        .bind(user_insert.role)
        .bind(user_insert.first_name)
        .bind(user_insert.last_name)
        .bind(user_insert.is_active)
        .bind(user_insert.password_hash)
        .bind(user.date_joined)
        .execute(&mut *tx)
        .await
        .map_err(map_user_unique_violation)?;

        sqlx::query(
            r"
            INSERT INTO profiles (id, user_id, bio, is_verified, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(profile_insert.id)
        .bind(profile_insert.user_id)
        .bind(profile_insert.bio)
        .bind(profile_insert.is_verified)
        .bind(profile.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let update = UserUpdate::new(user);

        let result = sqlx::query(
            r"
            UPDATE users
            SET email = $2, role = $3, first_name = $4, last_name = $5, is_active = $6
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.email)
        .bind(update.role)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let result =
            sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn profile_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE user_id = $1")
                .bind(user_id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
