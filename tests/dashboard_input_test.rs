//! Keyboard-driven dashboard flows through `App::handle_key`.

mod common;

use blockdash::adapters::mock::ScriptedSource;
use blockdash::app::Screen;
use blockdash::models::{Network, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{mounted_app, pump_one};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut blockdash::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[tokio::test(start_paused = true)]
async fn test_network_keys_cycle_selection() {
    let (mut app, _rx) = mounted_app(ScriptedSource::new());

    app.handle_key(key(KeyCode::Char('n')));
    app.handle_key(key(KeyCode::Char('n')));
    assert_eq!(
        app.dashboard.as_ref().unwrap().store.selection().network,
        Network::Arbitrum
    );

    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(
        app.dashboard.as_ref().unwrap().store.selection().network,
        Network::Optimism
    );
}

#[tokio::test(start_paused = true)]
async fn test_tab_keys_switch_tables() {
    let (mut app, _rx) = mounted_app(ScriptedSource::new());

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.dashboard.as_ref().unwrap().store.selection().tab, Tab::Blocks);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(
        app.dashboard.as_ref().unwrap().store.selection().tab,
        Tab::Transactions
    );
}

#[tokio::test(start_paused = true)]
async fn test_search_mode_captures_bound_keys() {
    let (mut app, _rx) = mounted_app(ScriptedSource::new());

    app.handle_key(key(KeyCode::Char('/')));
    assert!(app.search_active);

    // 'q' and 'n' are text here, not quit or next network
    type_text(&mut app, "0xqn");
    assert!(!app.should_quit);
    {
        let selection = app.dashboard.as_ref().unwrap().store.selection();
        assert_eq!(selection.search_text, "0xqn");
        assert_eq!(selection.network, Network::Ethereum);
    }

    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Enter));
    assert!(!app.search_active);
    assert_eq!(
        app.dashboard.as_ref().unwrap().store.selection().search_text,
        "0xq"
    );

    app.handle_key(key(KeyCode::Esc));
    assert!(app
        .dashboard
        .as_ref()
        .unwrap()
        .store
        .selection()
        .search_text
        .is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_refresh_key_marks_refreshing() {
    let (mut app, mut rx) = mounted_app(ScriptedSource::new().then_gas_price(50).then_gas_price(61));
    pump_one(&mut app, &mut rx).await;
    pump_one(&mut app, &mut rx).await;

    app.handle_key(key(KeyCode::Char('r')));
    assert!(app.dashboard.as_ref().unwrap().store.selection().is_refreshing);

    pump_one(&mut app, &mut rx).await;
    let store = &app.dashboard.as_ref().unwrap().store;
    assert!(!store.selection().is_refreshing);
    assert_eq!(store.stats().gas_price, 61);
}

#[tokio::test(start_paused = true)]
async fn test_home_key_unmounts_and_dashboard_key_remounts_fresh() {
    let (mut app, _rx) = mounted_app(ScriptedSource::new());
    app.handle_key(key(KeyCode::Char('2')));

    app.handle_key(key(KeyCode::Char('h')));
    assert_eq!(app.screen, Screen::Home);
    assert!(app.dashboard.is_none());

    app.handle_key(key(KeyCode::Char('d')));
    assert_eq!(app.screen, Screen::Dashboard);
    let store = &app.dashboard.as_ref().unwrap().store;
    assert_eq!(store.selection().tab, Tab::Transactions);
    assert_eq!(store.snapshots_applied(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_quits_even_while_searching() {
    let (mut app, _rx) = mounted_app(ScriptedSource::new());
    app.handle_key(key(KeyCode::Char('/')));

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit);
    assert!(app.dashboard.is_none());
}
