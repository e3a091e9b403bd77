//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`DashboardView`] - The mounted dashboard (store + scheduler)
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{DashboardView, Screen};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::adapters::source_from_config;
use crate::config::DashboardConfig;
use crate::error::DashboardResult;
use crate::input::{InputContext, IntentRegistry};
use crate::models::{HomeContent, SeedData};
use crate::traits::SnapshotSource;

/// How long a footer notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Mounted dashboard, present only while [`Screen::Dashboard`] is shown
    pub dashboard: Option<DashboardView>,
    /// Static home view content
    pub home: HomeContent,
    /// Search box has focus
    pub search_active: bool,
    /// Receiver for async messages (refresh ticks, fetch results)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// When the current footer notice should disappear
    notice_expires_at: Option<Instant>,
    config: DashboardConfig,
    source: Arc<dyn SnapshotSource>,
    seed: SeedData,
    registry: IntentRegistry,
}

impl App {
    /// Create an app with the given snapshot source and seed data.
    pub fn new(config: DashboardConfig, source: Arc<dyn SnapshotSource>, seed: SeedData) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            screen: Screen::Home,
            dashboard: None,
            home: HomeContent::demo(),
            search_active: false,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
            notice_expires_at: None,
            config,
            source,
            seed,
            registry: IntentRegistry::new(),
        }
    }

    /// Create an app with the source selected by `config` and the demo seed.
    pub fn from_config(config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        let source = source_from_config(&config);
        let seed = SeedData::demo()?;
        Ok(Self::new(config, source, seed))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::new(self.screen, self.search_active)
    }

    /// Advance the animation tick and expire old notices
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(expires_at) = self.notice_expires_at {
            if Instant::now() >= expires_at {
                self.notice_expires_at = None;
                if let Some(view) = self.dashboard.as_mut() {
                    view.store.clear_notice();
                }
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn arm_notice_timer(&mut self) {
        self.notice_expires_at = Some(Instant::now() + NOTICE_DURATION);
    }
}
