use std::rc::Rc;

use portal::{Invoke, PortalConfig};

use crate::api::FetchApi;

/// Shared by every page, provided as context by the app root.
#[derive(Clone)]
pub struct GlobalState {
    pub api: Rc<dyn Invoke>,
}

impl GlobalState {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            api: Rc::new(FetchApi::new(config)),
        }
    }
}
