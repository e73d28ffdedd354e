use crate::components::ui::{Avatar, Badge, Card, Icon, Size, Tone};
use crate::i18n::{self, fmt_number, medal};
use econquest_core::{Achievement, Dashboard, Player};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

fn summary_text(player: &Player) -> String {
    let level = player.level.to_string();
    let count = player.achievements.to_string();
    let mut m = BTreeMap::new();
    m.insert("level", level.as_str());
    m.insert("count", count.as_str());
    i18n::tr("leaderboard.summary", Some(&m))
}

fn xp_text(player: &Player) -> String {
    let xp = player.xp.to_string();
    let max = player.max_xp.to_string();
    let mut m = BTreeMap::new();
    m.insert("xp", xp.as_str());
    m.insert("max", max.as_str());
    i18n::tr("leaderboard.xp", Some(&m))
}

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct LeaderRowProps {
    pub index: usize,
    pub player: Player,
}

#[function_component(LeaderRow)]
pub fn leader_row(props: &LeaderRowProps) -> Html {
    let p = &props.player;
    let place = medal(props.index).map_or_else(|| format!("#{}", props.index + 1), str::to_string);
    let class = classes!(
        "leader-row",
        "flex",
        "items-center",
        "justify-between",
        "p-4",
        "rounded-lg",
        "border",
        "border-border",
        "bg-muted/50",
        "hover-scale",
        p.on_podium().then_some("pulse-glow")
    );
    html! {
        <div {class}>
            <div class="flex items-center gap-4">
                <span class="leader-place text-3xl w-12 text-center">{ place }</span>
                <Avatar text={p.id.to_string()} size={Size::Lg} class="text-lg" />
                <div>
                    <h3 class="font-bold text-lg">{ p.name.clone() }</h3>
                    <p class="text-sm text-muted-foreground">{ summary_text(p) }</p>
                </div>
            </div>
            <div class="text-right">
                <div class="flex items-center gap-2 justify-end">
                    <Icon name="Coins" size={20} class="text-secondary" />
                    <span class="leader-coins text-2xl font-bold text-secondary">{ fmt_number(u64::from(p.coins)) }</span>
                </div>
                <p class="text-sm text-muted-foreground mt-1">{ xp_text(p) }</p>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct AchievementTileProps {
    pub achievement: Achievement,
}

#[function_component(AchievementTile)]
pub fn achievement_tile(props: &AchievementTileProps) -> Html {
    let a = &props.achievement;
    let tone = Tone::for_rarity(a.rarity);
    let class = classes!(
        "achievement",
        format!("rarity-{}", a.rarity),
        "p-6",
        "rounded-lg",
        "border-2",
        tone.class("border"),
        format!("{}/10", tone.class("bg")),
        "hover-scale",
        "text-center",
        "space-y-3"
    );
    html! {
        <div {class}>
            <Icon name={a.icon.clone()} size={48} class="mx-auto" />
            <h3 class="font-bold text-lg">{ a.name.clone() }</h3>
            <Badge label={i18n::t(&format!("rarity.{}", a.rarity))} tone={tone} />
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct LeaderboardPageProps {
    pub dashboard: Rc<Dashboard>,
}

/// Top ten by coins, followed by the achievement tiers.
#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    let leaders_header = html! {
        <h2 class="flex items-center gap-2 text-2xl">
            <Icon name="Trophy" size={28} class="text-secondary" />
            { i18n::t("leaderboard.title") }
        </h2>
    };
    let achievements_header = html! {
        <h2 class="flex items-center gap-2 text-2xl">
            <Icon name="Award" size={28} class="text-primary" />
            { i18n::t("achievements.title") }
        </h2>
    };
    html! {
        <section class="leaderboard-view space-y-6" role="tabpanel">
            <Card header={leaders_header}>
                <div class="space-y-3">
                    { for props.dashboard.leaders().iter().enumerate().map(|(index, player)| html! {
                        <LeaderRow key={player.id} index={index} player={player.clone()} />
                    }) }
                </div>
            </Card>
            <Card header={achievements_header}>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    { for props.dashboard.achievements.iter().map(|a| html! {
                        <AchievementTile key={a.id} achievement={a.clone()} />
                    }) }
                </div>
            </Card>
        </section>
    }
}
