//! Window and navigation policy for the desktop shell.
//!
//! # Responsibility
//! - Describe the single application window.
//! - Veto every attempt to leave the bundled renderer.
//!
//! # Invariants
//! - No navigation request is ever allowed.
//! - Production vetoes of new windows carry a user-facing notice.

use contato_core::AppMode;
use log::warn;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const RENDERER_ENTRY: &str = "renderer/index.html";
const BLOCKED_NOTICE_TITLE: &str = "Navigation blocked";
const BLOCKED_NOTICE_BODY: &str = "Navigation to an external URL was blocked.";

/// Static description of the application window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub width: u32,
    pub height: u32,
    /// Renderer entry point, relative to the application bundle.
    pub entry: String,
    pub node_integration: bool,
    pub context_isolation: bool,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            entry: RENDERER_ENTRY.to_string(),
            node_integration: false,
            context_isolation: true,
        }
    }
}

/// Kind of navigation the renderer attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// In-place navigation of the main window.
    WillNavigate,
    /// Request to open a new window.
    NewWindow,
}

/// Message the shell should show after a veto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedNotice {
    pub title: String,
    pub body: String,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationVerdict {
    pub allowed: bool,
    pub notice: Option<BlockedNotice>,
}

/// Decides a navigation request; every request is vetoed.
pub fn decide_navigation(mode: AppMode, kind: NavigationKind, url: &str) -> NavigationVerdict {
    let notice = match (mode, kind) {
        (AppMode::Development, NavigationKind::WillNavigate) => {
            warn!("event=navigation_blocked module=shell kind=navigate url={url}");
            None
        }
        (AppMode::Development, NavigationKind::NewWindow) => {
            warn!("event=navigation_blocked module=shell kind=new_window url={url}");
            None
        }
        (AppMode::Production, NavigationKind::WillNavigate) => None,
        (AppMode::Production, NavigationKind::NewWindow) => Some(BlockedNotice {
            title: BLOCKED_NOTICE_TITLE.to_string(),
            body: BLOCKED_NOTICE_BODY.to_string(),
        }),
    };

    NavigationVerdict {
        allowed: false,
        notice,
    }
}
