//! Argon2id-hashed credentials
//!
//! Stores only the PHC string (algorithm, parameters, salt and hash), so the
//! secret itself is never kept in memory after registration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use super::{CredentialScheme, CredentialVerifier};
use crate::error::{TrackerError, TrackerResult};

/// Argon2 cost parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Iterations (default: 2)
    pub time_cost: u32,
    /// Parallelism degree (default: 1)
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_cost: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashParams {
    /// Minimal-cost parameters; only suitable for tests
    pub fn fast_for_tests() -> Self {
        Self {
            memory_cost: Params::MIN_M_COST,
            time_cost: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }

    fn hasher(&self) -> TrackerResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| TrackerError::Credential(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// A credential held as an Argon2id PHC hash string
#[derive(Debug, Clone)]
pub struct HashedCredential {
    phc: String,
}

impl HashedCredential {
    /// Hash `secret` with a fresh random salt
    pub fn seal(secret: &str, params: &HashParams) -> TrackerResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = params
            .hasher()?
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| TrackerError::Credential(format!("Hashing failed: {}", e)))?;

        Ok(Self {
            phc: hash.to_string(),
        })
    }

    /// The encoded PHC string
    pub fn phc(&self) -> &str {
        &self.phc
    }
}

impl CredentialVerifier for HashedCredential {
    fn verify(&self, candidate: &str) -> bool {
        // Parameters are read back from the PHC string.
        match PasswordHash::new(&self.phc) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    fn scheme(&self) -> CredentialScheme {
        CredentialScheme::Argon2
    }
}
