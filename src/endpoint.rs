//! # Endpoint Resolution
//!
//! The backend exposes one conversion endpoint per shop, on either the
//! production or the sandbox host:
//!
//! ```text
//! https://www.zbozi.cz/action/{shopId}/conversion/backend
//! https://sandbox.zbozi.cz/action/{shopId}/conversion/backend
//! ```
//!
//! The shop id is substituted as-is. Callers must supply a URL-safe value.

/// Production host
pub const PRODUCTION_HOST: &str = "www.zbozi.cz";

/// Sandbox host, mirrors production without affecting attribution data
pub const SANDBOX_HOST: &str = "sandbox.zbozi.cz";

/// Which backend a conversion is reported to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Pick the environment for a sandbox flag
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox { Self::Sandbox } else { Self::Production }
    }

    pub fn host(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_HOST,
            Self::Sandbox => SANDBOX_HOST,
        }
    }
}

/// Path of the conversion endpoint for a shop.
pub fn conversion_path(shop_id: &str) -> String {
    format!("/action/{}/conversion/backend", shop_id)
}

/// Full endpoint URL for a shop in the given environment.
///
/// ## Example
///
/// ```
/// use zbozi_konverze::endpoint::{conversion_url, Environment};
///
/// assert_eq!(
///     conversion_url(Environment::Sandbox, "1234567890"),
///     "https://sandbox.zbozi.cz/action/1234567890/conversion/backend"
/// );
/// ```
pub fn conversion_url(env: Environment, shop_id: &str) -> String {
    format!("https://{}{}", env.host(), conversion_path(shop_id))
}
