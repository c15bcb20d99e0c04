//! User repository - the persistence boundary for accounts.
//!
//! ## Uniqueness
//!
//! Email uniqueness is enforced by the `UNIQUE` index on `users.email` and
//! surfaces as `DbError::Conflict` at write time. Callers must not look an
//! email up before inserting; two concurrent registrations resolve to one
//! success and one conflict purely through the index.
//!
//! Uniqueness is exact-match, while `list` filters case-insensitively.
//!
//! ## Timestamps
//!
//! Stored as RFC 3339 UTC text with fixed microsecond precision, so
//! lexicographic order equals chronological order.
//!
//! ## Deadlines
//!
//! `with_timeout` bounds every call. Each write runs in its own transaction
//! that commits as the last step. Dropping the future before the commit
//! drops the transaction, which rolls the write back, so a call abandoned by
//! its deadline is either fully applied or not applied at all.

use crate::{DbError, Result as DbErrorResult};

use um_core::User;

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: r.name,
            email: r.email,
            password_hash: r.password_hash,
            created_at: parse_timestamp(&r.created_at, "users.created_at")?,
            updated_at: parse_timestamp(&r.updated_at, "users.updated_at")?,
        })
    }
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::Initialization {
            message: format!("Invalid timestamp in {}: {}", column, e),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
    timeout: Option<Duration>,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            timeout: None,
        }
    }

    /// Bound every operation by `limit`; `None` waits indefinitely
    pub fn with_timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = DbErrorResult<T>>,
    ) -> DbErrorResult<T> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| DbError::Timeout {
                    operation,
                    limit,
                    location: ErrorLocation::from(Location::caller()),
                })?,
            None => fut.await,
        }
    }

    /// Persist a new user. Fails with `Conflict` if the email is taken.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = format_timestamp(&user.created_at);
        let updated_at = format_timestamp(&user.updated_at);

        self.bounded("create", async {
            let mut tx = self.pool.begin().await?;

            sqlx::query(
                r#"
                    INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&created_at)
            .bind(&updated_at)
            .execute(&mut *tx)
            .await
            .map_err(DbError::from_write)?;

            tx.commit().await?;

            Ok(())
        })
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DbErrorResult<User> {
        let id_str = id.to_string();

        self.bounded("get_by_id", async {
            let row = sqlx::query_as::<_, UserRow>(
                r#"
                    SELECT id, name, email, password_hash, created_at, updated_at
                    FROM users
                    WHERE id = ?
                "#,
            )
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await?;

            row.map(User::try_from)
                .transpose()?
                .ok_or_else(|| DbError::NotFound {
                    entity: "User",
                    key: id_str.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .await
    }

    /// Exact-match lookup used by sign-in only
    pub async fn get_by_email(&self, email: &str) -> DbErrorResult<User> {
        self.bounded("get_by_email", async {
            let row = sqlx::query_as::<_, UserRow>(
                r#"
                    SELECT id, name, email, password_hash, created_at, updated_at
                    FROM users
                    WHERE email = ?
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

            // The key stays out of the error so emails don't end up in logs.
            row.map(User::try_from)
                .transpose()?
                .ok_or_else(|| DbError::NotFound {
                    entity: "User",
                    key: "<by email>".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .await
    }

    /// Write name, email and updated_at for an existing id.
    ///
    /// Identifier, password hash and created_at are never touched.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let updated_at = format_timestamp(&user.updated_at);

        self.bounded("update", async {
            let mut tx = self.pool.begin().await?;

            let result = sqlx::query(
                r#"
                    UPDATE users
                    SET name = ?, email = ?, updated_at = ?
                    WHERE id = ?
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&updated_at)
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::from_write)?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound {
                    entity: "User",
                    key: id.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            tx.commit().await?;

            Ok(())
        })
        .await
    }

    /// Users whose email contains `email_filter` (ASCII case-insensitive,
    /// literal match), newest first.
    ///
    /// SQLite reads a negative `offset` as zero and a negative `limit` as
    /// unbounded.
    pub async fn list(
        &self,
        email_filter: &str,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<Vec<User>> {
        self.bounded("list", async {
            let rows = sqlx::query_as::<_, UserRow>(
                r#"
                    SELECT id, name, email, password_hash, created_at, updated_at
                    FROM users
                    WHERE instr(lower(email), lower(?)) > 0
                    ORDER BY created_at DESC, id DESC
                    LIMIT ? OFFSET ?
                "#,
            )
            .bind(email_filter)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

            rows.into_iter()
                .map(User::try_from)
                .collect::<DbErrorResult<Vec<_>>>()
        })
        .await
    }
}
