use serde::{Deserialize, Serialize};

/// A user as stored server-side. `id` is assigned by the server and never
/// changes; everything else is client-editable.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Request body for create and update calls (the server assigns the id).
#[derive(Serialize, Debug, Clone)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
        }
    }
}
