//! Bridge between revalidation hooks and the ECS.
//!
//! Hooks registered on [`DebugDisplaySettings`] have no access to the world,
//! so they push the edited panel name into a [`RevalidationQueue`]. The
//! [`flush_revalidation_queue`] system drains it each frame and triggers one
//! [`DebugSettingsChangedEvent`] per entry.
//!
//! [`DebugDisplaySettings`]: crate::resources::debugsettings::DebugDisplaySettings
//! [`flush_revalidation_queue`]: crate::systems::debugsettings::flush_revalidation_queue
//! [`DebugSettingsChangedEvent`]: crate::events::debugsettings::DebugSettingsChangedEvent

use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::prelude::Resource;

/// Panel names edited since the last flush. Non-send resource.
#[derive(Clone, Default)]
pub struct RevalidationQueue {
    pending: Rc<RefCell<Vec<&'static str>>>,
}

impl RevalidationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hook that records edits into this queue.
    pub fn hook(&self) -> impl FnMut(&'static str) + 'static {
        let pending = self.pending.clone();
        move |panel| pending.borrow_mut().push(panel)
    }

    /// Take every pending entry, oldest first.
    pub fn drain(&self) -> Vec<&'static str> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    /// Number of edits waiting for the next flush.
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// True if nothing was edited since the last flush.
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

/// Monotonic counter bumped on every debug settings change.
///
/// Pipeline code that caches anything derived from the debug settings
/// watches this resource with change detection.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugSettingsRevision {
    pub revision: u64,
    /// Panel named by the most recent change.
    pub last_panel: Option<&'static str>,
}

impl DebugSettingsRevision {
    pub fn bump(&mut self, panel: &'static str) {
        self.revision += 1;
        self.last_panel = Some(panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_feeds_queue() {
        let queue = RevalidationQueue::new();
        let mut hook = queue.hook();
        hook("Material");
        hook("Rendering");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain(), vec!["Material", "Rendering"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_revision_bump() {
        let mut rev = DebugSettingsRevision::default();
        rev.bump("Lighting");
        rev.bump("Validation");
        assert_eq!(rev.revision, 2);
        assert_eq!(rev.last_panel, Some("Validation"));
    }
}
