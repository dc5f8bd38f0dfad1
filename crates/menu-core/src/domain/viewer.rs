//! Acting principal for visibility checks

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whoever is looking at the menu. Guests are represented by `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewer {
    pub id: Uuid,
}

impl Viewer {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
