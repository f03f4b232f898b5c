//! Argon2 password hashing implementation.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use userhub_core::ports::{AuthError, PasswordService};

/// Default iteration count.
pub const DEFAULT_COST: u32 = 12;

/// Argon2id password service.
///
/// `cost` is the Argon2 iteration count. Verification reads the parameters
/// stored in each hash, so raising the cost keeps old hashes valid.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn with_cost(cost: u32) -> Result<Self, AuthError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Argon2PasswordService {
        Argon2PasswordService::with_cost(1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = fast();
        let password = "P4ssw0rD";

        let hash = service.hash(password).unwrap();
        assert_ne!(hash, password);
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("WrongPass1", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = fast();

        let first = service.hash("P4ssw0rD").unwrap();
        let second = service.hash("P4ssw0rD").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_cost_is_embedded_in_hash() {
        let hash = Argon2PasswordService::with_cost(2)
            .unwrap()
            .hash("P4ssw0rD")
            .unwrap();

        assert!(hash.contains("t=2"));
        // A service configured with another cost still verifies it.
        assert!(fast().verify("P4ssw0rD", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = fast().verify("P4ssw0rD", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }

    #[test]
    fn test_zero_cost_rejected() {
        assert!(Argon2PasswordService::with_cost(0).is_err());
    }
}
