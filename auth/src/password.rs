use anyhow::Context;

const BCRYPT_COST: u32 = 12;

#[tracing::instrument(skip_all)]
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    bcrypt::hash(password, BCRYPT_COST).context("failed to hash password")
}

/// Returns false for both a mismatched password and an unparseable stored
/// hash. Login failures never distinguish the two.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() -> anyhow::Result<()> {
        let hashed = hash_password("password123")?;

        assert!(verify_password("password123", &hashed));
        assert!(!verify_password("password124", &hashed));

        Ok(())
    }

    #[test]
    fn garbage_hash_does_not_verify() {
        assert!(!verify_password("password123", "not-a-bcrypt-hash"));
    }
}
