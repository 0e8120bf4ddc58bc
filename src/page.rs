//! The hosting surface.
//!
//! A page is a set of named mount regions that renderers append cards
//! into. Lookup is by exact id, mirroring how a host document exposes
//! anchor elements: the renderer asks for one fixed id and either gets a
//! mount or does not.

use crate::card::Card;

/// The id the grid renderer looks up. Pages built by this binary always
/// carry it; tests exercise pages that do not.
pub const MOUNT_ID: &str = "dashboard-grid";

/// An append-only, ordered card container.
#[derive(Debug)]
pub struct Mount {
    id: String,
    cards: Vec<Card>,
}

impl Mount {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends never replace: rendering into a non-empty mount grows it.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Page {
    mounts: Vec<Mount>,
}

impl Page {
    /// A page with no mounts at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard host surface: a single grid mount.
    pub fn standard() -> Self {
        Self::empty().with_mount(MOUNT_ID)
    }

    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.mounts.push(Mount::new(id));
        self
    }

    pub fn mount(&self, id: &str) -> Option<&Mount> {
        self.mounts.iter().find(|m| m.id() == id)
    }

    pub fn mount_mut(&mut self, id: &str) -> Option<&mut Mount> {
        self.mounts.iter_mut().find(|m| m.id() == id)
    }
}
