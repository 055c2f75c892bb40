//! Application state shared by the Discord event handlers.
//!
//! Built once at startup and cloned into the event handler. Every field is cheap to
//! clone: the roll service and the profile store are reference counted, so clones share
//! the same locks and documents.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{data::hunt_profile::JsonProfileStore, service::roll::RollService};

#[derive(Clone)]
pub struct AppState {
    /// Roll transaction over the reward state and cooldown ledger.
    pub roll: RollService,

    /// Hunt profiles; reads write the document back, so access is serialized.
    pub profiles: Arc<Mutex<JsonProfileStore>>,

    /// Channel receiving stock announcements after a win.
    pub announcement_channel_id: u64,
}

impl AppState {
    pub fn new(roll: RollService, profiles: JsonProfileStore, announcement_channel_id: u64) -> Self {
        Self {
            roll,
            profiles: Arc::new(Mutex::new(profiles)),
            announcement_channel_id,
        }
    }
}
