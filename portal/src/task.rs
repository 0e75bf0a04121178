use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

/// Mount scope of a form instance. Requests started through
/// [`Lifetime::guard`] deliver their result only while the form is still
/// mounted, [`Lifetime::unmount`] aborts everything still in flight.
#[derive(Clone, Debug)]
pub struct Lifetime {
    mounted: Arc<AtomicBool>,
    next_id: Arc<AtomicU64>,
    handles: Arc<Mutex<HashMap<u64, AbortHandle>>>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
            next_id: Arc::new(AtomicU64::new(0)),
            handles: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
        if let Ok(mut handles) = self.handles.lock() {
            for (_, handle) in handles.drain() {
                handle.abort();
            }
        }
    }

    /// Wrap `future` so it resolves to `None` when the form went away
    /// before or while it ran.
    pub fn guard<F>(&self, future: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if self.is_mounted() {
            if let Ok(mut handles) = self.handles.lock() {
                handles.insert(id, handle);
            }
        } else {
            handle.abort();
        }

        let mounted = Arc::clone(&self.mounted);
        let handles = Arc::clone(&self.handles);
        async move {
            let result = Abortable::new(future, registration).await;
            if let Ok(mut handles) = handles.lock() {
                handles.remove(&id);
            }
            match result {
                Ok(output) if mounted.load(Ordering::SeqCst) => Some(output),
                Ok(_) => {
                    log::debug!("dropping result, form is unmounted");
                    None
                }
                Err(_) => None,
            }
        }
    }
}
