//! Credential verification for spendbook accounts
//!
//! Accounts hold a `CredentialVerifier` rather than a raw password, so the
//! comparison strategy can change without touching the tracker service.
//!
//! Two schemes are provided:
//!
//! - `Plaintext`: exact string equality. This is the default and matches the
//!   tracker's historical behavior. It offers no protection against timing
//!   side channels or brute force.
//! - `Argon2`: the credential is stored as an Argon2id PHC hash with a random
//!   salt and checked with `PasswordVerifier`.

pub mod hashed;
pub mod plaintext;
pub mod secure_memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;

pub use hashed::{HashParams, HashedCredential};
pub use plaintext::PlaintextCredential;
pub use secure_memory::SecureString;

/// Checks a candidate credential against a stored one
pub trait CredentialVerifier: fmt::Debug {
    /// Returns true if `candidate` is the stored credential
    fn verify(&self, candidate: &str) -> bool;

    /// The scheme this verifier was sealed with
    fn scheme(&self) -> CredentialScheme;
}

/// How new credentials are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CredentialScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plaintext => write!(f, "plaintext"),
            Self::Argon2 => write!(f, "argon2"),
        }
    }
}

/// Scheme plus hashing parameters, as read from settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPolicy {
    #[serde(default)]
    pub scheme: CredentialScheme,

    #[serde(default)]
    pub hash_params: HashParams,
}

impl CredentialPolicy {
    /// Turn a freshly supplied secret into a stored verifier
    pub fn seal(&self, secret: &str) -> TrackerResult<Box<dyn CredentialVerifier>> {
        match self.scheme {
            CredentialScheme::Plaintext => Ok(Box::new(PlaintextCredential::new(secret))),
            CredentialScheme::Argon2 => Ok(Box::new(HashedCredential::seal(
                secret,
                &self.hash_params,
            )?)),
        }
    }
}
