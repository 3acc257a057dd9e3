//! Identifiers handed out by the engine core.
//!
//! The core owns every scene entity, material and mesh; the editor only
//! ever holds these opaque numeric handles. Ids start at 1 and are never
//! reused within one document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scene entity identifier (model, light or camera).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Material identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Material({})", self.0)
    }
}

/// Mesh identifier inside the loaded model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeshId(pub u32);

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mesh({})", self.0)
    }
}

/// Monotonic id source. Never hands out 0 and never reuses a value.
#[derive(Clone, Debug)]
pub struct IdCounter {
    next: u32,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next raw id.
    pub fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Make sure ids handed out from now on are greater than `raw`.
    ///
    /// Used when restoring snapshots or loading documents that carry
    /// their own ids.
    pub fn observe(&mut self, raw: u32) {
        if raw >= self.next {
            self.next = raw + 1;
        }
    }

    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_one() {
        let mut ids = IdCounter::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
    }

    #[test]
    fn test_counter_observe() {
        let mut ids = IdCounter::new();
        ids.observe(10);
        assert_eq!(ids.next(), 11);

        // Observing an older id must not move the counter backwards
        ids.observe(3);
        assert_eq!(ids.next(), 12);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(EntityId(5).to_string(), "Entity(5)");
        assert_eq!(MaterialId(2).to_string(), "Material(2)");
        assert_eq!(MeshId(0).to_string(), "Mesh(0)");
    }
}
