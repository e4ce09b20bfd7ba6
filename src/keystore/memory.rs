//! In-memory credential store for tests.

use super::{Credentials, KeyStore};
use crate::error::Result;

/// Credential store with no persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    credentials: Credentials,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with credentials.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl KeyStore for MemoryStore {
    fn load(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }

    fn save(&mut self, credentials: &Credentials) -> Result<()> {
        self.credentials = credentials.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderId;

    #[test]
    fn behaves_like_the_file_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap().configured_count(), 0);

        let mut creds = Credentials::new();
        creds.set(ProviderId::Giphy, "g-key");
        store.save(&creds).unwrap();

        assert_eq!(store.load().unwrap(), creds);
    }
}
