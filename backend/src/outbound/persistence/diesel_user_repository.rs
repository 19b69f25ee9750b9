//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Pairing and unpairing lock both rows with `SELECT ... FOR UPDATE` inside
//! one transaction so concurrent requests cannot leave a one-sided
//! partnership. The `users_partner_id_key` unique constraint backs this up:
//! a violation surfaces as `AlreadyPartnered`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::warn;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::ports::{UserPersistenceError, UserRepository, UserWithPartner};
use crate::domain::{
    Email, Ladder, LadderId, UserAccount, UserContact, UserCredentials, UserId,
};

use super::diesel_basic_error_mapping::{is_unique_violation_on, map_diesel_error, map_pool_error};
use super::diesel_ladder_repository::row_to_ladder;
use super::models::{LadderRow, UserContactRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{ladders, users};

const PARTNER_UNIQUE_CONSTRAINT: &str = "users_partner_id_key";

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, UserPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserPersistenceError> {
    let email = Email::new(&row.email)
        .map_err(|err| UserPersistenceError::query(format!("user row {}: {err}", row.id)))?;
    let ladder_id = row
        .ladder_id
        .map(LadderId::new)
        .transpose()
        .map_err(|err| UserPersistenceError::query(format!("user row {}: {err}", row.id)))?;
    Ok(UserAccount {
        id: UserId::from_uuid(row.id),
        email,
        name: row.name,
        ladder_id,
        partner_id: row.partner_id.map(UserId::from_uuid),
    })
}

fn row_to_contact(row: UserContactRow) -> Result<UserContact, UserPersistenceError> {
    let email = Email::new(&row.email)
        .map_err(|err| UserPersistenceError::query(format!("user row {}: {err}", row.id)))?;
    Ok(UserContact {
        email,
        name: row.name,
    })
}

/// Result of the pairing transaction; only `Paired` writes anything.
enum PairOutcome {
    Paired,
    Missing(Uuid),
    AlreadyPartnered(Uuid),
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_account).transpose()
    }

    async fn find_current_ladder(
        &self,
        email: &Email,
    ) -> Result<Option<Ladder>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<LadderRow> = users::table
            .inner_join(ladders::table)
            .filter(users::email.eq(email.as_ref()))
            .select(LadderRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(|row| row_to_ladder(row).map_err(UserPersistenceError::query))
            .transpose()
    }

    async fn find_with_partner(
        &self,
        email: &Email,
    ) -> Result<Option<UserWithPartner>, UserPersistenceError> {
        let partners = diesel::alias!(users as partners);
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<(UserRow, Option<(Uuid, String, Option<String>)>)> = users::table
            .left_join(partners.on(users::partner_id.eq(partners.field(users::id).nullable())))
            .filter(users::email.eq(email.as_ref()))
            .select((
                UserRow::as_select(),
                partners
                    .fields((users::id, users::email, users::name))
                    .nullable(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        let Some((user, partner)) = row else {
            return Ok(None);
        };
        let partner = partner
            .map(|(id, email, name)| row_to_contact(UserContactRow { id, email, name }))
            .transpose()?;
        Ok(Some(UserWithPartner {
            account: row_to_account(user)?,
            partner,
        }))
    }

    async fn list_unpartnered_except(
        &self,
        email: &Email,
    ) -> Result<Vec<UserContact>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<UserContactRow> = users::table
            .filter(users::email.ne(email.as_ref()))
            .filter(users::partner_id.is_null())
            .order(users::email.asc())
            .select(UserContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        // Rows whose email fails validation are left out of the directory.
        Ok(rows
            .into_iter()
            .filter_map(|row| match row_to_contact(row) {
                Ok(contact) => Some(contact),
                Err(err) => {
                    warn!(error = %err, "skipping user with unusable contact details");
                    None
                }
            })
            .collect())
    }

    async fn find_credentials(
        &self,
        email: &Email,
    ) -> Result<Option<UserCredentials>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<(UserRow, String)> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select((UserRow::as_select(), users::password))
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(|(user, password)| {
            Ok(UserCredentials {
                account: row_to_account(user)?,
                password_hash: Zeroizing::new(password),
            })
        })
        .transpose()
    }

    async fn assign_ladder(
        &self,
        user: &UserId,
        ladder: LadderId,
    ) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let updated = diesel::update(users::table.filter(users::id.eq(user.as_uuid())))
            .set(users::ladder_id.eq(Some(ladder.get())))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        if updated == 0 {
            return Err(UserPersistenceError::missing_user(user.to_string()));
        }
        Ok(())
    }

    async fn pair(&self, first: &UserId, second: &UserId) -> Result<(), UserPersistenceError> {
        let first = *first.as_uuid();
        let second = *second.as_uuid();
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let outcome = conn
            .transaction(|conn| {
                async move {
                    let locked: Vec<(Uuid, Option<Uuid>)> = users::table
                        .filter(users::id.eq_any(vec![first, second]))
                        .select((users::id, users::partner_id))
                        .order(users::id.asc())
                        .for_update()
                        .load(conn)
                        .await?;

                    for id in [first, second] {
                        match locked.iter().find(|(row_id, _)| *row_id == id) {
                            None => return Ok(PairOutcome::Missing(id)),
                            Some((_, Some(_))) => return Ok(PairOutcome::AlreadyPartnered(id)),
                            Some((_, None)) => {}
                        }
                    }

                    diesel::update(users::table.filter(users::id.eq(first)))
                        .set(users::partner_id.eq(Some(second)))
                        .execute(conn)
                        .await?;
                    diesel::update(users::table.filter(users::id.eq(second)))
                        .set(users::partner_id.eq(Some(first)))
                        .execute(conn)
                        .await?;
                    Ok(PairOutcome::Paired)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: diesel::result::Error| {
                if is_unique_violation_on(&err, PARTNER_UNIQUE_CONSTRAINT) {
                    UserPersistenceError::already_partnered(second.to_string())
                } else {
                    diesel_error(err)
                }
            })?;

        match outcome {
            PairOutcome::Paired => Ok(()),
            PairOutcome::Missing(id) => Err(UserPersistenceError::missing_user(id.to_string())),
            PairOutcome::AlreadyPartnered(id) => {
                Err(UserPersistenceError::already_partnered(id.to_string()))
            }
        }
    }

    async fn unpair(&self, user: &UserId) -> Result<bool, UserPersistenceError> {
        let user = *user.as_uuid();
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        conn.transaction(|conn| {
            async move {
                let partner: Option<Option<Uuid>> = users::table
                    .filter(users::id.eq(user))
                    .select(users::partner_id)
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?;
                let Some(Some(partner)) = partner else {
                    return Ok(false);
                };

                diesel::update(
                    users::table.filter(
                        users::id
                            .eq(user)
                            .or(users::id.eq(partner).and(users::partner_id.eq(user))),
                    ),
                )
                .set(users::partner_id.eq(None::<Uuid>))
                .execute(conn)
                .await?;
                Ok(true)
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)
    }
}
