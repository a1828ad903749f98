//! Plaintext credential comparison

use super::{CredentialScheme, CredentialVerifier, SecureString};

/// Stores the credential as given and compares by exact equality
///
/// Empty credentials are accepted.
#[derive(Debug)]
pub struct PlaintextCredential {
    secret: SecureString,
}

impl PlaintextCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecureString::new(secret),
        }
    }
}

impl CredentialVerifier for PlaintextCredential {
    fn verify(&self, candidate: &str) -> bool {
        self.secret.as_str() == candidate
    }

    fn scheme(&self) -> CredentialScheme {
        CredentialScheme::Plaintext
    }
}
