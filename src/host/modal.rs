//! Generic modal-override registry.
//!
//! An ordered set of named override requests, each carrying which host
//! subsystems it wants locked; the active override is the
//! highest-priority entry. The rig itself only needs push/pop, but the
//! registry is host-facing so it keeps the full query surface.

use super::HostModalStack;

/// Which host subsystems an override claims exclusive control of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockFlags {
    /// Lock host camera input.
    pub camera_input: bool,
    /// Lock host player input.
    pub player_input: bool,
    /// Confine and hide the cursor.
    pub cursor: bool,
}

/// A named, prioritized claim on exclusive control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOverride {
    /// Unique name identifying the claimant.
    pub name: String,
    /// Higher priority wins; ties go to the most recent push.
    pub priority: i32,
    /// Subsystems locked while this override is active.
    pub locks: LockFlags,
}

/// Registry of modal overrides. Insertion-ordered; the active entry is
/// the highest-priority one.
#[derive(Debug, Default)]
pub struct ModalStack {
    entries: Vec<ModalOverride>,
}

impl ModalStack {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override. Re-pushing an existing name replaces the
    /// old entry in place.
    pub fn push(&mut self, entry: ModalOverride) {
        if let Some(existing) =
            self.entries.iter_mut().find(|e| e.name == entry.name)
        {
            log::warn!("modal override '{}' re-pushed, replacing", entry.name);
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Remove the override with the given name. Popping an unknown name
    /// is a no-op.
    pub fn pop(&mut self, name: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        if self.entries.len() == before {
            log::warn!("modal override '{name}' popped but was never pushed");
        }
    }

    /// The currently active override, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ModalOverride> {
        self.entries.iter().max_by_key(|e| e.priority)
    }

    /// Effective lock flags of the active override (all clear if empty).
    #[must_use]
    pub fn active_locks(&self) -> LockFlags {
        self.active().map_or_else(LockFlags::default, |e| e.locks)
    }

    /// Number of registered overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no override is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HostModalStack for ModalStack {
    fn push_override(&mut self, entry: ModalOverride) {
        self.push(entry);
    }

    fn pop_override(&mut self, name: &str) {
        self.pop(name);
    }
}
