//! Navigation handoff.
//!
//! Activating a card hands the descriptor's `url` to the host environment
//! and forgets about it. The string is passed through untouched, fragment
//! routes included, and the caller never learns whether the destination
//! loaded, rendered an error page, or went nowhere at all.

use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::DashboardDescriptor;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// The navigation action, injected wherever a card can be activated so
/// tests can observe handoffs without a real browser.
pub trait Navigator {
    /// Ask the host environment to open the descriptor's destination in a
    /// new, independent context. Fire-and-forget.
    fn open(&self, dashboard: &DashboardDescriptor);
}

/// Opens destinations with the platform opener, or with a configured
/// browser command when one is set.
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }

    /// Spawn the opener process detached. The child is never waited on;
    /// only the spawn itself can be observed to fail.
    pub fn launch(&self, dashboard: &DashboardDescriptor) -> Result<(), OpenError> {
        info!(
            id = %dashboard.id,
            url = %dashboard.url,
            "opening dashboard '{}'", dashboard.title
        );
        let (command, args) = opener_command(&dashboard.url, self.browser.as_deref());
        Command::new(&command)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| OpenError::Spawn { command, source })
    }
}

impl Navigator for SystemOpener {
    fn open(&self, dashboard: &DashboardDescriptor) {
        // Card activation has no error channel: a failed spawn leaves a
        // log entry and nothing else.
        if let Err(err) = self.launch(dashboard) {
            debug!("navigation handoff failed: {err}");
        }
    }
}

/// The process and arguments that open `url` on this platform. A
/// configured browser command takes the URL as its single argument.
fn opener_command(url: &str, browser: Option<&str>) -> (String, Vec<String>) {
    if let Some(browser) = browser {
        return (browser.to_string(), vec![url.to_string()]);
    }
    if cfg!(target_os = "macos") {
        ("open".to_string(), vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd".to_string(),
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open".to_string(), vec![url.to_string()])
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Navigator;
    use crate::catalog::DashboardDescriptor;

    /// Records every handoff instead of spawning anything.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) opened: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub(crate) fn opened_urls(&self) -> Vec<String> {
            self.opened.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, dashboard: &DashboardDescriptor) {
            self.opened.borrow_mut().push(dashboard.url.clone());
        }
    }
}
