use serde_json::json;
use test_utils::{builder::TestBuilder, fixture};

use crate::{
    data::hunt_profile::{JsonProfileStore, ProfileStore},
    error::storage::StorageError,
    model::hunt::{HuntItem, HuntProfile},
};
