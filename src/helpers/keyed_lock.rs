use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per key. Callers holding the same key run one at a time,
/// different keys never wait on each other.
#[derive(Default)]
pub struct KeyedLock {
    slots: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyedLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().await;
            // a slot referenced only by the map has no holder and no waiter
            slots.retain(|k, slot| k == key || Arc::strong_count(slot) > 1);
            slots.entry(key.to_string()).or_default().clone()
        };

        slot.lock_owned().await
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }
}
