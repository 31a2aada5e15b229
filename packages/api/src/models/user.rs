use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::Id;

/// What a user can reach in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "cliente", alias = "client")]
    Client,
    #[serde(rename = "vendedor", alias = "vendor")]
    Vendor,
    #[serde(rename = "repartidor", alias = "driver")]
    Driver,
}

impl Role {
    /// Value used on the wire and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "cliente",
            Role::Vendor => "vendedor",
            Role::Driver => "repartidor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cliente" | "client" => Ok(Role::Client),
            "vendedor" | "vendor" => Ok(Role::Vendor),
            "repartidor" | "driver" => Ok(Role::Driver),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// A user as returned by `/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Id,
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: String,
    pub email: String,
    /// Only present on raw backend records; never cached by the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "rol", alias = "role")]
    pub role: Role,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserRecord {
    /// The same record with the password dropped.
    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    /// Display name, falling back to email if name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Registration payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "rol")]
    pub role: Role,
    /// Restaurant details for vendors registering together with their restaurant.
    #[serde(rename = "restaurante", default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Map<String, Value>>,
}

/// Email and password entered on the login form.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Data of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    #[serde(alias = "usuario")]
    pub user: UserRecord,
}
