//! Authentication module
//!
//! The Cegid API uses an OAuth-style password grant: a fixed token endpoint
//! exchanges username/password for a bearer access token. The token is
//! fetched lazily, once per extraction session, and cached for the session
//! lifetime — there is no refresh-token handling.
//!
//! Authentication fails loudly: every page fetch depends on a valid bearer
//! token, so a masked failure here would surface downstream as silent data
//! loss.

mod authenticator;
mod types;

pub use authenticator::TokenAuthenticator;
pub use types::{TokenBundle, CEGID_TOKEN_URL};
