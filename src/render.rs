//! Materializing the catalog into the page.

use tracing::error;

use crate::card::Card;
use crate::catalog::Catalog;
use crate::page::{Mount, Page, MOUNT_ID};

/// Renderer lifecycle. One forward transition, no teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Uninitialized,
    Rendered,
}

/// Builds one card per catalog descriptor and appends them to the page's
/// grid mount.
pub struct Renderer {
    catalog: Catalog,
    state: RenderState,
}

impl Renderer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: RenderState::Uninitialized,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Page-ready entry point: locate the grid mount by its fixed id and
    /// materialize the catalog into it.
    ///
    /// A page without the grid mount gets one log entry per attempt and no
    /// cards, and the renderer stays `Uninitialized`. No error reaches the
    /// caller.
    pub fn init(&mut self, page: &mut Page) {
        let Some(mount) = page.mount_mut(MOUNT_ID) else {
            error!(mount = MOUNT_ID, "grid mount not found, nothing rendered");
            return;
        };
        self.render(mount);
    }

    /// Append one card per descriptor, in catalog order. Nothing clears or
    /// replaces, so a second call grows the mount by another full set.
    pub fn render(&mut self, mount: &mut Mount) {
        for descriptor in self.catalog.iter() {
            mount.append(Card::build(descriptor));
        }
        self.state = RenderState::Rendered;
    }
}
