//! One dashboard as an interactive unit.
//!
//! A card carries its descriptor verbatim and exposes two activation
//! channels with one effect: a pointer click, and Enter or Space while
//! focused. Both hand the descriptor to the injected navigator. Every
//! other key is reported as not consumed so the shell keeps its default
//! handling for it.

use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::DashboardDescriptor;
use crate::nav::Navigator;

#[derive(Debug, Clone)]
pub struct Card {
    descriptor: DashboardDescriptor,
    action_label: String,
}

impl Card {
    /// Build a card from a descriptor. Fields are copied without
    /// defaulting: an empty icon or url stays empty and surfaces as-is.
    pub fn build(descriptor: &DashboardDescriptor) -> Self {
        let action_label = format!("Open dashboard for {}", descriptor.title);
        Self {
            descriptor: descriptor.clone(),
            action_label,
        }
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    pub fn description(&self) -> &str {
        &self.descriptor.description
    }

    pub fn icon(&self) -> &str {
        &self.descriptor.icon
    }

    pub fn url(&self) -> &str {
        &self.descriptor.url
    }

    /// Spoken-form label for the activation, shown in the footer for the
    /// focused card.
    pub fn action_label(&self) -> &str {
        &self.action_label
    }

    /// Pointer activation: always hands off.
    pub fn click(&self, nav: &dyn Navigator) {
        nav.open(&self.descriptor);
    }

    /// Key activation. Enter and Space hand off and are reported as
    /// consumed; anything else is left untouched for the caller.
    /// Modifiers are ignored, matching pointer behavior.
    pub fn handle_key(&self, key: KeyEvent, nav: &dyn Navigator) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                nav.open(&self.descriptor);
                true
            }
            _ => false,
        }
    }
}
