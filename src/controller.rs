use tracing::{debug, error};

use crate::client::UsersClient;
use crate::error::{Result, UsersError};
use crate::notify::{Confirmer, Kind, Notifier};
use crate::types::{User, UserPayload};
use crate::validate::{parse_age, validate_email};

/// Transient form state. Field values stay raw strings until the validation
/// boundary; `editing` holds the id of the user being edited, `None` in the
/// idle state.
#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub age: String,
    pub editing: Option<i64>,
    pub email_is_valid: bool,
}

impl FormState {
    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.age.clear();
        self.email_is_valid = true;
    }
}

/// Owns the form state and a local mirror of the remote user collection, and
/// keeps the mirror synchronized by re-fetching after every successful
/// mutation. All truth lives server-side.
///
/// Failures inside an operation become a user-facing notification plus an
/// operator log line; they never tear down the controller. The one exception
/// is updating an id that is not in the mirror, which is an explicit
/// `UserNotFound` error.
pub struct FormController<N, C> {
    client: UsersClient,
    notifier: N,
    confirmer: C,
    users: Vec<User>,
    form: FormState,
}

impl<N: Notifier, C: Confirmer> FormController<N, C> {
    pub fn new(client: UsersClient, notifier: N, confirmer: C) -> Self {
        Self {
            client,
            notifier,
            confirmer,
            users: Vec::new(),
            form: FormState {
                email_is_valid: true,
                ..FormState::default()
            },
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_name(&mut self, name: String) {
        self.form.name = name;
    }

    pub fn set_age(&mut self, age: String) {
        self.form.age = age;
    }

    /// Update the email field and recompute validity immediately.
    pub fn on_email_input(&mut self, value: &str) {
        self.form.email = value.to_string();
        self.form.email_is_valid = validate_email(value);
    }

    pub fn enter_edit_mode(&mut self, user: &User) {
        self.form.name = user.name.clone();
        self.form.email = user.email.clone();
        self.form.email_is_valid = validate_email(&user.email);
        self.form.age = user.age.to_string();
        self.form.editing = Some(user.id);
    }

    pub fn cancel_edit(&mut self) {
        self.form.editing = None;
        self.form.clear_fields();
    }

    /// Replace the mirror with the server's collection. On failure the mirror
    /// is emptied and the error goes to the operator log only; the end user
    /// sees the empty list. No retry.
    pub async fn fetch_users(&mut self) {
        match self.client.list_users().await {
            Ok(users) => self.users = users,
            Err(e) => {
                error!("failed to fetch users: {e}");
                self.users.clear();
            }
        }
    }

    /// Validate the draft and create a user. Precondition failures notify and
    /// abort before any network call.
    pub async fn create_user(&mut self) {
        if self.form.name.is_empty() || self.form.email.is_empty() || self.form.age.is_empty() {
            self.notifier.notify(Kind::Error, "All fields are required!");
            return;
        }

        let age = match parse_age(&self.form.age) {
            Some(age) if age > 18 => age,
            _ => {
                self.notifier.notify(Kind::Error, "Age must be above 18!");
                return;
            }
        };

        if !validate_email(&self.form.email) {
            self.notifier
                .notify(Kind::Error, "Please enter a valid email address!");
            return;
        }

        if self.users.iter().any(|u| u.email == self.form.email) {
            self.notifier.notify(Kind::Error, "Email already exists!");
            return;
        }

        let payload = UserPayload {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            age,
        };

        match self.client.create_user(&payload).await {
            Ok(created) => {
                debug!("created user {} ({})", created.id, created.email);
                self.form.clear_fields();
                self.notifier
                    .notify(Kind::Success, "User created successfully!");
                self.fetch_users().await;
            }
            Err(UsersError::Conflict) => {
                error!("create rejected by server: email {} taken", payload.email);
                self.notifier.notify(Kind::Error, "User already exists!");
            }
            Err(e) => {
                error!("failed to create user: {e}");
                self.notifier.notify(Kind::Error, "Failed to create user.");
            }
        }
    }

    /// Validate the merged record (draft fields falling back to the stored
    /// values when left blank) and update the user. An id with no mirror
    /// entry is an explicit error; everything else notifies and returns.
    pub async fn update_user(&mut self, id: i64) -> Result<()> {
        let Some(current) = self.user(id).cloned() else {
            return Err(UsersError::UserNotFound(id));
        };

        let name = if self.form.name.is_empty() {
            current.name.clone()
        } else {
            self.form.name.clone()
        };
        let email = if self.form.email.is_empty() {
            current.email.clone()
        } else {
            self.form.email.clone()
        };
        let age = if self.form.age.is_empty() {
            Some(current.age)
        } else {
            parse_age(&self.form.age)
        };

        if name.is_empty() || email.is_empty() {
            self.notifier.notify(Kind::Error, "All fields are required!");
            return Ok(());
        }

        let age = match age {
            Some(age) if age > 18 => age,
            _ => {
                self.notifier.notify(Kind::Error, "Age must be above 18!");
                return Ok(());
            }
        };

        if !validate_email(&email) {
            self.notifier
                .notify(Kind::Error, "Please enter a valid email address!");
            return Ok(());
        }

        if self.users.iter().any(|u| u.id != id && u.email == email) {
            self.notifier.notify(Kind::Error, "Email already exists!");
            return Ok(());
        }

        let merged = User {
            id,
            name,
            email,
            age,
        };

        if merged == current {
            self.notifier.notify(Kind::Success, "No changes detected!");
            return Ok(());
        }

        match self.client.update_user(id, &merged.payload()).await {
            Ok(()) => {
                debug!("updated user {id}");
                self.form.editing = None;
                self.form.clear_fields();
                self.notifier
                    .notify(Kind::Success, "User updated successfully!");
                self.fetch_users().await;
            }
            Err(e) => {
                error!("failed to update user {id}: {e}");
                self.notifier.notify(Kind::Error, "Failed to update user.");
            }
        }

        Ok(())
    }

    /// Ask for confirmation, then delete. Declining does nothing at all.
    pub async fn delete_user(&mut self, id: i64) {
        let confirmed = self
            .confirmer
            .confirm("You will not be able to recover this user. Delete?")
            .await;

        if !confirmed {
            return;
        }

        match self.client.delete_user(id).await {
            Ok(()) => {
                debug!("deleted user {id}");
                self.notifier
                    .notify(Kind::Success, "User deleted successfully!");
                self.fetch_users().await;
            }
            Err(e) => {
                error!("failed to delete user {id}: {e}");
                self.notifier.notify(Kind::Error, "Failed to delete user.");
            }
        }
    }
}
