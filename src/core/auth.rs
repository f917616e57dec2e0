use std::time::Duration;

use tracing::{debug, instrument};

/// Display name used when the form supplies neither a name nor an email.
pub const FALLBACK_NAME: &str = "EcoWarrior";

pub const DEMO_EMAIL: &str = "student@campus.edu";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "Alex Green";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Contents of the sign-in form while the modal is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormDraft {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl AuthFormDraft {
    /// Demo credentials. Fills the form without submitting it.
    pub fn demo() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            name: DEMO_NAME.to_string(),
        }
    }

    pub fn fill_demo(&mut self) {
        *self = Self::demo();
    }

    /// Name shown after sign-in: the given name, else the email local part,
    /// else [`FALLBACK_NAME`].
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => FALLBACK_NAME.to_string(),
        }
    }
}

/// Simulated sign-in round trip. There is no backend: after `delay` the
/// resolved display name is returned and the call never fails.
#[instrument(skip(draft), fields(email = %draft.email))]
pub async fn submit(draft: AuthFormDraft, delay: Duration) -> String {
    tokio::time::sleep(delay).await;
    let name = draft.display_name();
    debug!("Simulated sign-in resolved to {}", name);
    name
}
