use econquest_core::{Dashboard, DashboardView, RosterConfig, encode_roster_code};
use econquest_web::app::{App, DashboardShell, ShellProps, build_dashboard};
use econquest_web::components::footer::{Footer, Props as FooterProps};
use futures::executor::block_on;
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn shell_props(dashboard: Dashboard, active: DashboardView) -> ShellProps {
    ShellProps {
        dashboard: Rc::new(dashboard),
        active,
        current_lang: econquest_web::i18n::current_lang(),
        on_select: Callback::noop(),
        on_lang_change: Callback::noop(),
    }
}

fn render_view(seed: u64, active: DashboardView) -> String {
    let props = shell_props(build_dashboard(seed), active);
    block_on(LocalServerRenderer::<DashboardShell>::with_props(props).render())
}

#[test]
fn players_view_renders_every_card() {
    econquest_web::i18n::set_lang("ru");
    let html = render_view(42, DashboardView::Players);
    assert_eq!(html.matches("player-card").count(), 28);
    assert!(html.contains("Игрок 1"));
    assert!(html.contains("Игрок 28"));
    assert!(html.contains("/1000"));
    assert!(html.contains("История экономических учений"));
    assert!(!html.contains("leader-row"));
}

#[test]
fn leaderboard_view_shows_top_ten_and_achievements() {
    econquest_web::i18n::set_lang("ru");
    let html = render_view(42, DashboardView::Leaderboard);
    assert_eq!(html.matches("leader-row").count(), 10);
    assert!(html.contains("🥇"));
    assert!(html.contains("🥉"));
    assert_eq!(html.matches("pulse-glow").count(), 3);
    assert!(html.contains("#4"));
    assert!(!html.contains("#11"));
    assert!(html.contains("Магистр"));
    assert!(html.contains("rarity-legendary"));
    assert!(html.contains("border-purple-500"));
    assert!(html.contains("Таблица лидеров"));
}

#[test]
fn leaderboard_lists_richest_player_first() {
    econquest_web::i18n::set_lang("en");
    let dashboard = build_dashboard(7);
    let top = dashboard.players[0].clone();
    let html = block_on(
        LocalServerRenderer::<DashboardShell>::with_props(shell_props(
            dashboard,
            DashboardView::Leaderboard,
        ))
        .render(),
    );
    let first_row = html.find("leader-row").unwrap();
    let top_name = html.find(&format!("{}<", top.name)).unwrap();
    assert!(top_name > first_row);
    assert!(html[first_row..top_name].contains("🥇"));
}

#[test]
fn ministries_view_formats_budget_and_influence() {
    econquest_web::i18n::set_lang("ru");
    let html = render_view(1, DashboardView::Ministries);
    assert_eq!(html.matches("ministry-card").count(), 3);
    assert!(html.contains("Министерство финансов"));
    assert!(html.contains("₽1500k"));
    assert!(html.contains("₽2000k"));
    assert!(html.contains("₽800k"));
    assert!(html.contains("156"));
    assert!(html.contains("95%"));
    assert!(html.contains("Войти в панель"));
}

#[test]
fn english_locale_relabels_players_without_reshuffling() {
    econquest_web::i18n::set_lang("ru");
    let ru = build_dashboard(99);
    econquest_web::i18n::set_lang("en");
    let en = build_dashboard(99);
    assert_eq!(en.players[0].name, format!("Player {}", en.players[0].id));
    let ru_stats: Vec<(u32, u32, u32)> = ru.players.iter().map(|p| (p.id, p.coins, p.rank)).collect();
    let en_stats: Vec<(u32, u32, u32)> = en.players.iter().map(|p| (p.id, p.coins, p.rank)).collect();
    assert_eq!(ru_stats, en_stats);

    let html = render_view(99, DashboardView::Players);
    assert!(html.contains("History of Economic Thought"));
    assert!(html.contains("Level "));
}

#[test]
fn only_active_tab_is_selected() {
    econquest_web::i18n::set_lang("ru");
    let html = render_view(3, DashboardView::Ministries);
    assert_eq!(html.matches("tab-active").count(), 1);
    assert_eq!(html.matches("role=\"tab\"").count(), 3);
    assert!(html.contains("aria-selected=\"true\""));
}

#[test]
fn footer_links_canonical_code() {
    econquest_web::i18n::set_lang("ru");
    let seed = econquest_core::canonical_seed(2024);
    let html = block_on(LocalServerRenderer::<Footer>::with_props(FooterProps { seed }).render());
    let code = encode_roster_code(seed);
    assert!(html.contains(&format!("?seed={seed}")));
    assert!(html.contains(&format!("?code={code}")));
}

#[test]
fn footer_keeps_raw_seed_and_does_not_link_lossy_code() {
    econquest_web::i18n::set_lang("ru");
    let seed = 65_578;
    let html = block_on(LocalServerRenderer::<Footer>::with_props(FooterProps { seed }).render());
    assert!(html.contains("?seed=65578"));
    assert!(html.contains(&encode_roster_code(seed)));
    assert!(!html.contains("?code="));
}

#[test]
fn app_renders_players_by_default() {
    econquest_web::i18n::set_lang("ru");
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert_eq!(html.matches("player-card").count(), 28);
    assert!(html.contains("seed-code"));
}

#[test]
fn custom_roster_size_flows_through_shell() {
    econquest_web::i18n::set_lang("ru");
    let dashboard = Dashboard::generate(5, &RosterConfig::default().with_count(4));
    let html = block_on(
        LocalServerRenderer::<DashboardShell>::with_props(shell_props(
            dashboard,
            DashboardView::Leaderboard,
        ))
        .render(),
    );
    assert_eq!(html.matches("leader-row").count(), 4);
}
