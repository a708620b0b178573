//! Authentication module for IAIQ.
//!
//! Token lifecycle (key derivation, issuance, validation), request-scoped
//! identity binding, ownership checks, and member accounts.

pub mod account;
pub mod guard;
pub mod key;
mod password;
pub mod session;
pub mod token;

pub use account::{login, signup, SignupRequest};
pub use guard::{require_owner_of, require_ownership, OwnedResource};
pub use key::{derive_key, SigningKey, MIN_SECRET_LENGTH};
pub use password::{hash_password, validate_password, verify_password, PasswordError};
pub use session::{AuthenticatedIdentity, RequestContext, SessionBinder};
pub use token::{Claims, TokenProvider, ACCESS_TOKEN_VALID_SECS};
