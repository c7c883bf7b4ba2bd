//! Session context
//!
//! Login gate for the dashboard. The session is an explicit context
//! object: constructed once at the app root, it reads persisted storage
//! a single time and from then on owns every transition between the
//! unauthenticated and authenticated states.
//!
//! The credential scheme is deliberately weak: the submitted pair is
//! compared against a build-time configured admin login and the stored
//! "token" is just a reversible encoding of the credentials. It is a
//! placeholder gate for a trusted-network deployment, not real
//! authentication.

use leptos::*;

use crate::util::is_valid_email;

const TOKEN_KEY: &str = "auth_token";
const EMAIL_KEY: &str = "user_email";

/// Fallback admin login, overridable at build time.
pub const DEFAULT_ADMIN_EMAIL: &str = match option_env!("POSTPILOT_ADMIN_EMAIL") {
    Some(email) => email,
    None => "admin@postpilot.local",
};

const DEFAULT_ADMIN_PASSWORD: &str = match option_env!("POSTPILOT_ADMIN_PASSWORD") {
    Some(password) => password,
    None => "postpilot-admin",
};

/// The logged-in admin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub email: String,
}

/// Process-wide authentication state.
#[derive(Clone)]
pub struct Session {
    pub user: RwSignal<Option<UserInfo>>,
}

/// Provide the session to the component tree.
pub fn provide_session() {
    provide_context(Session::new());
}

/// Fetch the session from context.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided")
}

impl Session {
    /// Initial state comes from persisted storage: a stored token and
    /// email mean authenticated, without re-validating against the
    /// backend.
    pub fn new() -> Self {
        let user = match (persisted_token(), persisted_email()) {
            (Some(_), Some(email)) => Some(UserInfo { email }),
            _ => None,
        };
        Self {
            user: create_rw_signal(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn email(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.email.clone()))
    }

    /// Compare the submitted pair against the configured admin login.
    /// On match, persist a derived token plus the email and flip to
    /// authenticated.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if !is_valid_email(email) || password.is_empty() {
            return false;
        }
        if email != admin_email() || password != admin_password() {
            return false;
        }

        persist(email, &encode_token(email, password));
        self.user.set(Some(UserInfo {
            email: email.to_string(),
        }));
        true
    }

    /// Explicit logout: clear storage and reset state. Navigation is the
    /// caller's job (the sidebar uses the router).
    pub fn logout(&self) {
        clear_persisted();
        self.user.set(None);
    }

    /// The 401 path. Idempotent: repeated calls within one burst clear
    /// and navigate once.
    pub fn invalidate(&self) {
        clear_persisted();
        if self.user.with_untracked(|u| u.is_some()) {
            self.user.set(None);
            redirect_to_login();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn admin_email() -> &'static str {
    DEFAULT_ADMIN_EMAIL
}

fn admin_password() -> &'static str {
    DEFAULT_ADMIN_PASSWORD
}

/// Derive the session token from the credentials. Trivially reversible;
/// see the module docs.
pub fn encode_token(email: &str, password: &str) -> String {
    base64_encode(format!("{}:{}", email, password).as_bytes())
}

pub fn persisted_token() -> Option<String> {
    read_item(TOKEN_KEY)
}

pub fn persisted_email() -> Option<String> {
    read_item(EMAIL_KEY)
}

fn persist(email: &str, token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(EMAIL_KEY, email);
    }
}

pub fn clear_persisted() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(EMAIL_KEY);
    }
}

pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

fn read_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Base64 without padding dependencies; enough for the placeholder token.
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let b0 = data[i] as usize;
        let b1 = if i + 1 < data.len() { data[i + 1] as usize } else { 0 };
        let b2 = if i + 2 < data.len() { data[i + 2] as usize } else { 0 };

        result.push(ALPHABET[b0 >> 2] as char);
        result.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);

        if i + 1 < data.len() {
            result.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
        } else {
            result.push('=');
        }

        if i + 2 < data.len() {
            result.push(ALPHABET[b2 & 0x3f] as char);
        } else {
            result.push('=');
        }

        i += 3;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_base64_of_credentials() {
        // btoa("a@b.co:pw")
        assert_eq!(encode_token("a@b.co", "pw"), "YUBiLmNvOnB3");
    }

    #[test]
    fn base64_padding() {
        assert_eq!(base64_encode(b"M"), "TQ==");
        assert_eq!(base64_encode(b"Ma"), "TWE=");
        assert_eq!(base64_encode(b"Man"), "TWFu");
    }
}
