//! Message and intent handling for the App.

use crossterm::event::KeyEvent;

use super::{App, AppMessage};
use crate::clipboard;
use crate::input::Intent;
use crate::ui::format::short_address;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Refresh(event) => {
                let Some(view) = self.dashboard.as_mut() else {
                    tracing::debug!(
                        generation = event.generation(),
                        "Dropping refresh event, dashboard not mounted"
                    );
                    return;
                };
                let before = view.store.revision();
                let outcome = view.scheduler.handle(event, &mut view.store);
                tracing::trace!(?outcome, "Refresh event handled");
                if view.store.revision() != before {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Translate a key press into an intent and apply it
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.input_context();
        if let Some(intent) = self.registry.dispatch(key, &context) {
            self.apply_intent(intent);
        }
    }

    /// Apply a user intent.
    ///
    /// Dashboard intents are ignored while the dashboard is not mounted.
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Quit => self.quit(),
            Intent::NavigateHome => self.navigate_to_home(),
            Intent::NavigateDashboard => self.navigate_to_dashboard(),
            Intent::Noop => {}
            Intent::CopyAddress => self.copy_wallet_address(),
            intent => self.apply_dashboard_intent(intent),
        }
    }

    fn apply_dashboard_intent(&mut self, intent: Intent) {
        let Some(view) = self.dashboard.as_mut() else {
            tracing::debug!(?intent, "Ignoring dashboard intent, dashboard not mounted");
            return;
        };
        let store = &mut view.store;
        let before = store.revision();

        match intent {
            Intent::Refresh => {
                if !view.scheduler.request_manual_refresh(store) {
                    tracing::debug!("Manual refresh rejected");
                }
            }
            Intent::ToggleTab => {
                let tab = store.selection().tab.toggle();
                store.set_active_tab(tab);
            }
            Intent::SelectTab(tab) => store.set_active_tab(tab),
            Intent::NextNetwork => {
                let network = store.selection().network.next();
                store.set_active_network(network);
            }
            Intent::PrevNetwork => {
                let network = store.selection().network.prev();
                store.set_active_network(network);
            }
            Intent::StartSearch => {
                self.search_active = true;
                self.needs_redraw = true;
            }
            Intent::EndSearch => {
                self.search_active = false;
                self.needs_redraw = true;
            }
            Intent::ClearSearch => {
                self.search_active = false;
                self.needs_redraw = true;
                store.set_search_text(String::new());
            }
            Intent::SearchChar(c) => {
                let mut text = store.selection().search_text.clone();
                text.push(c);
                store.set_search_text(text);
            }
            Intent::SearchBackspace => {
                let mut text = store.selection().search_text.clone();
                text.pop();
                store.set_search_text(text);
            }
            Intent::Quit
            | Intent::NavigateHome
            | Intent::NavigateDashboard
            | Intent::CopyAddress
            | Intent::Noop => {}
        }

        if store.revision() != before {
            self.needs_redraw = true;
        }
    }

    fn copy_wallet_address(&mut self) {
        let Some(view) = self.dashboard.as_mut() else {
            return;
        };
        let address = view.store.wallet().address().to_string();

        match clipboard::copy_text(&address) {
            Ok(()) => {
                tracing::info!("Wallet address copied to clipboard");
                view.store
                    .set_notice(format!("Copied {}", short_address(&address)));
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), "Clipboard copy failed: {}", e);
                view.store.set_notice(format!("Copy failed: {}", e));
            }
        }
        self.arm_notice_timer();
        self.mark_dirty();
    }
}
