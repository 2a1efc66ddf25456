use leptos::prelude::*;

/// Secret key passed from an import action to the creation page.
///
/// Lives in context so the key never appears in a URL or the history.
/// The page takes it once; a reload starts with an empty form.
#[derive(Clone, Copy)]
pub struct SecretKeyHandoff {
    key: RwSignal<Option<String>>,
}

impl SecretKeyHandoff {
    pub fn new() -> Self {
        Self {
            key: RwSignal::new(None),
        }
    }

    pub fn offer(&self, secret_key: String) {
        self.key.set(Some(secret_key));
    }

    pub fn take(&self) -> Option<String> {
        self.key.try_update(Option::take).flatten()
    }
}

impl Default for SecretKeyHandoff {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_taken_once() {
        let owner = Owner::new();
        owner.with(|| {
            let handoff = SecretKeyHandoff::new();
            assert_eq!(handoff.take(), None);
            handoff.offer("SKEY".into());
            assert_eq!(handoff.take().as_deref(), Some("SKEY"));
            assert_eq!(handoff.take(), None);
        });
    }
}
