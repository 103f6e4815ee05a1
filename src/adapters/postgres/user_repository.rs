//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::access::Role;
use crate::domain::foundation::{DomainError, ErrorCode, Email, UserId};
use crate::domain::ordering::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of the UserRepository port.
///
/// The unique index on `users.email` backs `insert_if_absent`.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: Option<String>,
    email: String,
    role: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::new(row.email).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid stored email: {}", e))
        })?;

        Ok(User {
            id: UserId::from_uuid(row.id),
            name: row.name,
            email,
            role: Role::from_stored(row.role.as_deref()),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, role
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find user: {}", e))
        })?;

        row.map(User::try_from).transpose()
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert user: {}", e))
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, role
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list users: {}", e))
        })?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn promote_to_admin(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET role = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(Role::Admin.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to promote user: {}", e))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
