//! Post-mutation callbacks registered on the menu service

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
    Restored,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Created => "created",
            MutationKind::Updated => "updated",
            MutationKind::Deleted => "deleted",
            MutationKind::Restored => "restored",
        }
    }
}

/// Invoked after a menu, or one of its items, was written.
///
/// `alias` is always the alias of the owning menu.
#[async_trait]
pub trait MenuMutationHook: Send + Sync {
    async fn menu_changed(&self, alias: &str, kind: MutationKind);
}
