//! Integration tests for shell-driven storefront sessions.

#![allow(clippy::unwrap_used)]

use levelup_core::{FilterTag, ListingId, Price};
use levelup_integration_tests::{session, session_with, three_band_catalog};
use levelup_storefront::error::AppError;
use levelup_storefront::shell::execute_line;
use levelup_storefront::state::{AppState, View};

async fn run(state: &mut AppState, line: &str) -> String {
    execute_line(state, line).await.unwrap().output
}

fn balance(state: &AppState) -> Price {
    state.user().unwrap().balance
}

// ============================================================================
// Purchases
// ============================================================================

#[tokio::test]
async fn test_purchase_flow() {
    let mut state = session();

    let out = run(&mut state, "buy 2").await;
    assert!(out.contains("Требуется авторизация"));

    let out = run(&mut state, "login").await;
    assert!(out.contains("Вход выполнен"));

    let out = run(&mut state, "buy 2").await;
    assert!(out.contains("Вы приобрели Dota 2 Pro Account"));
    assert_eq!(balance(&state), Price::new(15000 - 8499));

    let out = run(&mut state, "buy 6").await;
    assert!(out.contains("Недостаточно средств"));
    assert_eq!(balance(&state), Price::new(15000 - 8499));

    let out = run(&mut state, "topup 5000").await;
    assert!(out.contains("Баланс пополнен"));
    run(&mut state, "buy 6").await;
    assert_eq!(balance(&state), Price::new(15000 - 8499 + 5000 - 6799));

    let dashboard = state.dashboard().unwrap();
    assert_eq!(dashboard.stats.purchases, 2);
    assert_eq!(dashboard.stats.total_spent, Price::new(8499 + 6799));
}

#[test]
fn test_failed_purchase_leaves_history_untouched() {
    let mut state = session_with(three_band_catalog());
    state.login_with_steam();

    assert_eq!(
        state.buy(&ListingId::new("missing")).unwrap_err(),
        AppError::ListingNotFound(ListingId::new("missing"))
    );
    assert_eq!(state.dashboard().unwrap().stats.purchases, 0);
    assert_eq!(balance(&state), Price::new(15000));
}

#[tokio::test]
async fn test_catalog_is_not_mutated_by_purchases() {
    let mut state = session();
    run(&mut state, "login").await;
    run(&mut state, "buy 3").await;
    run(&mut state, "buy 3").await;
    assert_eq!(state.content().listings().len(), 6);
    assert_eq!(state.dashboard().unwrap().purchases.len(), 2);
}

// ============================================================================
// Account
// ============================================================================

#[tokio::test]
async fn test_email_login() {
    let mut state = session();

    let out = run(&mut state, "login nobody hunter2").await;
    assert!(out.contains("Ошибка входа"));
    assert!(!state.is_logged_in());

    run(&mut state, "login me@example.com hunter2").await;
    assert_eq!(state.user().unwrap().email.as_str(), "me@example.com");
}

#[tokio::test]
async fn test_dashboard_and_logout() {
    let mut state = session();

    let out = run(&mut state, "dashboard").await;
    assert!(out.contains("Требуется авторизация"));

    run(&mut state, "login").await;
    run(&mut state, "sell 700 Old CS account").await;
    run(&mut state, "avatar https://example.com/me.png").await;

    let out = run(&mut state, "dashboard").await;
    assert_eq!(state.view(), View::Dashboard);
    assert!(out.contains("Old CS account"));
    assert!(out.contains("https://example.com/me.png"));
    assert!(out.contains("Всего продаж:     1"));

    let out = run(&mut state, "logout").await;
    assert!(out.contains("До скорой встречи!"));
    assert_eq!(state.view(), View::Home);
    assert!(state.dashboard().is_err());

    run(&mut state, "login").await;
    assert_eq!(state.dashboard().unwrap().stats.sales, 1);
    let out = run(&mut state, "dashboard").await;
    assert!(out.contains("Old CS account"));
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_catalog_filter_persists() {
    let mut state = session();
    run(&mut state, "catalog budget").await;
    assert_eq!(state.filter(), FilterTag::Budget);

    let out = run(&mut state, "home").await;
    assert!(out.contains("[Бюджетные]"));
    assert!(out.contains("Indie Games Paradise"));
    assert!(!out.contains("Competitive FPS Account"));
}

#[tokio::test]
async fn test_static_pages() {
    let mut state = session();
    assert!(run(&mut state, "faq").await.contains("Могу ли я вернуть аккаунт?"));
    assert!(run(&mut state, "contacts").await.contains("mailto:support@levelup.market"));
    assert!(run(&mut state, "help").await.contains("topup"));
    assert!(run(&mut state, "show 4").await.contains("AAA Games Collection"));
    assert!(run(&mut state, "show 40").await.contains("Аккаунт не найден"));
}

#[tokio::test]
async fn test_dashboard_serializes() {
    let mut state = session();
    run(&mut state, "login").await;
    run(&mut state, "buy 3").await;

    let value = serde_json::to_value(state.dashboard().unwrap()).unwrap();
    assert_eq!(value["stats"]["purchases"], 1);
    assert_eq!(value["stats"]["rating"], "5.0");
    assert_eq!(value["profile"]["email"], "player@steam.com");
    assert_eq!(value["purchases"][0]["listing"]["id"], "3");
}
