//! Directory of users the caller may invite as a partner.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UsersQuery};
use crate::domain::{Email, Error, UserContact};

/// Service implementing [`UsersQuery`] over the user repository.
#[derive(Clone)]
pub struct UserDirectoryService<U> {
    users: Arc<U>,
}

impl<U> UserDirectoryService<U> {
    /// Create the service over a user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UsersQuery for UserDirectoryService<U>
where
    U: UserRepository,
{
    async fn list_available_partners(&self, caller: &Email) -> Result<Vec<UserContact>, Error> {
        self.users
            .list_unpartnered_except(caller)
            .await
            .map_err(|err| Error::internal(format!("user repository error: {err}")))
    }
}
