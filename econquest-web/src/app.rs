use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::ViewTabs;
use crate::i18n;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::ministries::MinistriesPage;
use crate::pages::players::PlayersPage;
use crate::session;
use econquest_core::{Dashboard, DashboardView, RosterConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Roster for `seed` with player names in the active locale.
#[must_use]
pub fn build_dashboard(seed: u64) -> Dashboard {
    let cfg = RosterConfig::default().with_label(i18n::t("player.label"));
    let dashboard = Dashboard::generate(seed, &cfg);
    log::info!(
        "generated {} players for roster {}",
        dashboard.players.len(),
        dashboard.roster_code()
    );
    dashboard
}

#[derive(Properties, Clone, PartialEq)]
pub struct ShellProps {
    pub dashboard: Rc<Dashboard>,
    pub active: DashboardView,
    pub current_lang: String,
    #[prop_or_default]
    pub on_select: Callback<DashboardView>,
    #[prop_or_default]
    pub on_lang_change: Callback<String>,
}

/// Stateless page layout; `App` owns the state.
#[function_component(DashboardShell)]
pub fn dashboard_shell(props: &ShellProps) -> Html {
    let dashboard = props.dashboard.clone();
    let content = match props.active {
        DashboardView::Players => html! { <PlayersPage {dashboard} /> },
        DashboardView::Leaderboard => html! { <LeaderboardPage {dashboard} /> },
        DashboardView::Ministries => html! { <MinistriesPage {dashboard} /> },
    };
    html! {
        <div class="min-h-screen bg-background p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <Header current_lang={props.current_lang.clone()} on_lang_change={props.on_lang_change.clone()} />
                <main id="main" class="w-full">
                    <ViewTabs active={props.active} on_select={props.on_select.clone()} />
                    { content }
                </main>
                <Footer seed={props.dashboard.seed} />
            </div>
        </div>
    }
}

/// Top-level component mounted by `start`.
///
/// The roster seed is fixed for the session; switching language regenerates
/// from the same seed so only the player names change.
#[function_component(App)]
pub fn app() -> Html {
    let seed = use_state(session::initial_seed);
    let lang = use_state(i18n::current_lang);
    let view = use_state(session::initial_view);
    let dashboard = use_memo((*seed, (*lang).clone()), |(seed, _)| {
        build_dashboard(*seed)
    });

    let on_select = {
        let view = view.clone();
        Callback::from(move |next: DashboardView| {
            log::debug!("switching view to {next}");
            view.set(next);
        })
    };
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| lang.set(code))
    };

    html! {
        <DashboardShell
            dashboard={dashboard}
            active={*view}
            current_lang={(*lang).clone()}
            {on_select}
            {on_lang_change}
        />
    }
}
