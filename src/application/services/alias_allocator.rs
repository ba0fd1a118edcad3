//! Alias selection for new mappings.

use std::sync::Arc;

use crate::domain::UrlError;
use crate::domain::entities::Allocation;
use crate::domain::repositories::UrlSaver;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias, is_reserved};

/// Default cap on random alias attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Tunables for random alias generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSettings {
    /// Length of generated aliases.
    pub length: usize,
    /// Maximum number of candidates tried before [`UrlError::AllocationExhausted`].
    pub max_attempts: u32,
}

impl Default for AliasSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Picks the alias for a new record and commits it through the store.
///
/// A caller-chosen alias is attempted exactly once. Without one, random
/// candidates are tried until the store accepts one or the retry budget is
/// spent. Uniqueness is decided by the store's own constraint, never by a
/// lookup before insert.
pub struct AliasAllocator<S: UrlSaver + ?Sized> {
    saver: Arc<S>,
    settings: AliasSettings,
}

impl<S: UrlSaver + ?Sized> AliasAllocator<S> {
    /// Creates a new allocator over the given store.
    pub fn new(saver: Arc<S>, settings: AliasSettings) -> Self {
        Self { saver, settings }
    }

    /// Stores `url` under `alias`, or under a freshly generated alias when
    /// `alias` is `None`.
    ///
    /// # Errors
    ///
    /// - [`UrlError::AliasConflict`] if the caller-chosen alias is taken.
    ///   The alias is never renamed.
    /// - [`UrlError::AllocationExhausted`] if every random candidate collided.
    /// - [`UrlError::StorageFailure`] as soon as the store reports one.
    pub async fn allocate(&self, url: &str, alias: Option<&str>) -> Result<Allocation, UrlError> {
        if let Some(alias) = alias {
            let id = self.saver.save_url(url, alias).await?;
            return Ok(Allocation {
                id,
                alias: alias.to_owned(),
            });
        }

        let length = self.settings.length;
        self.allocate_random(url, || generate_alias(length)).await
    }

    /// Random-alias loop over an arbitrary candidate source.
    ///
    /// Reserved candidates are skipped but still count as an attempt.
    async fn allocate_random<F>(
        &self,
        url: &str,
        mut next_candidate: F,
    ) -> Result<Allocation, UrlError>
    where
        F: FnMut() -> String,
    {
        for _ in 0..self.settings.max_attempts {
            let candidate = next_candidate();
            if is_reserved(&candidate) {
                continue;
            }

            match self.saver.save_url(url, &candidate).await {
                Ok(id) => {
                    return Ok(Allocation {
                        id,
                        alias: candidate,
                    });
                }
                Err(UrlError::AliasConflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(UrlError::AllocationExhausted {
            attempts: self.settings.max_attempts,
        })
    }
}
