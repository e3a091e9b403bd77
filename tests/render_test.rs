//! Rendering smoke tests on ratatui's TestBackend.

use blockdash::adapters::mock::{sample_snapshot, ScriptedSource};
use blockdash::app::App;
use blockdash::config::DashboardConfig;
use blockdash::models::{Network, SeedData, Tab};
use blockdash::state::DashboardStore;
use blockdash::ui;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

const WIDTH: u16 = 140;
const HEIGHT: u16 = 45;

/// Render the dashboard for `store` and return the buffer, one line per row.
fn render_store(store: &DashboardStore, search_active: bool) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            let view = store.view();
            ui::dashboard::render(f, area, &view, search_active);
        })
        .unwrap();
    buffer_text(&terminal)
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded_store() -> DashboardStore {
    let mut store = DashboardStore::new(SeedData::demo().unwrap()).unwrap();
    store.apply_snapshot(sample_snapshot());
    store
}

#[test]
fn test_dashboard_shows_title_and_active_network() {
    let mut store = loaded_store();
    store.set_active_network(Network::Polygon);

    let text = render_store(&store, false);

    assert!(text.contains("Blockchain Dashboard"));
    assert!(text.contains("Real-time monitoring for Polygon"));
    assert!(text.contains("Ethereum  Polygon  Arbitrum  Optimism"));
}

#[test]
fn test_refresh_control_label_follows_flag() {
    let mut store = loaded_store();
    assert!(render_store(&store, false).contains("[r] Refresh"));

    store.set_refreshing(true);
    let text = render_store(&store, false);

    assert!(text.contains("Refreshing..."));
    assert!(!text.contains("[r] Refresh"));
}

#[test]
fn test_placeholder_before_first_snapshot() {
    let store = DashboardStore::new(SeedData::demo().unwrap()).unwrap();

    let text = render_store(&store, false);

    assert!(text.contains("--"));
    assert!(text.contains("Waiting for first snapshot"));
}

#[test]
fn test_stat_cards_show_snapshot_values() {
    let text = render_store(&loaded_store(), false);

    assert!(text.contains("1,456,789"));
    assert!(text.contains("89,234"));
    assert!(text.contains("45 Gwei"));
}

#[test]
fn test_transactions_tab_lists_transactions() {
    let text = render_store(&loaded_store(), false);

    assert!(text.contains("0xabc123..."));
    assert!(text.contains("0xmno345..."));
    assert!(!text.contains("#1567890"));
}

#[test]
fn test_blocks_tab_lists_blocks() {
    let mut store = loaded_store();
    store.set_active_tab(Tab::Blocks);

    let text = render_store(&store, false);

    assert!(text.contains("#1567890"));
    assert!(text.contains("0xminer1..."));
    assert!(!text.contains("0xabc123..."));
}

#[test]
fn test_search_filters_rows_and_reports_no_matches() {
    let mut store = loaded_store();
    store.set_search_text("0xdef");
    let text = render_store(&store, true);
    assert!(text.contains("0xdef456..."));
    assert!(!text.contains("0xabc123..."));

    store.set_search_text("zzz");
    assert!(render_store(&store, true).contains("No matches for \"zzz\""));
}

#[test]
fn test_wallet_card_flags_value_discrepancy() {
    let text = render_store(&loaded_store(), false);

    assert!(text.contains("Wallet Balance"));
    assert!(text.contains("$8,250.50"));
    assert!(text.contains("tokens differ from total"));
}

#[test]
fn test_app_renders_home_until_dashboard_mounted() {
    let app = App::new(
        DashboardConfig::default(),
        Arc::new(ScriptedSource::new()),
        SeedData::demo().unwrap(),
    );
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

    terminal.draw(|f| ui::render(f, &app)).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("Web3 Market Overview"));
    assert!(!text.contains("Blockchain Dashboard"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let store = loaded_store();
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            let view = store.view();
            ui::dashboard::render(f, area, &view, false);
        })
        .unwrap();
}
