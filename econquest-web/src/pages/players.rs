use crate::components::ui::{Avatar, Badge, Card, Icon, Progress};
use crate::i18n;
use econquest_core::{Dashboard, Player};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct PlayerCardProps {
    pub player: Player,
}

fn level_text(level: u32) -> String {
    let level = level.to_string();
    let mut m = BTreeMap::new();
    m.insert("level", level.as_str());
    i18n::tr("player.level", Some(&m))
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let p = &props.player;
    let header = html! {
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-3">
                <Avatar text={p.id.to_string()} />
                <div>
                    <h3 class="card-title text-lg">{ p.name.clone() }</h3>
                    <p class="text-sm text-muted-foreground">{ level_text(p.level) }</p>
                </div>
            </div>
            <Badge label={format!("#{}", p.rank)} class="bg-primary/10 player-rank" />
        </div>
    };
    html! {
        <Card header={header} class="player-card hover-scale hover:border-primary transition-all cursor-pointer">
            <div class="space-y-2">
                <div class="flex justify-between text-sm">
                    <span class="text-muted-foreground">{ i18n::t("player.xp") }</span>
                    <span class="font-semibold player-xp">{ format!("{}/{}", p.xp, p.max_xp) }</span>
                </div>
                <Progress percent={p.xp_percent()} label={i18n::t("player.xp")} class="h-2" />
            </div>
            <div class="flex items-center justify-between pt-2 border-t border-border">
                <div class="flex items-center gap-2" title={i18n::t("player.coins")}>
                    <Icon name="Coins" size={16} class="text-secondary" />
                    <span class="font-bold text-secondary player-coins">{ p.coins.to_string() }</span>
                </div>
                <div class="flex items-center gap-2" title={i18n::t("player.achievements")}>
                    <Icon name="Award" size={16} class="text-primary" />
                    <span class="font-semibold">{ p.achievements.to_string() }</span>
                </div>
            </div>
        </Card>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct PlayersPageProps {
    pub dashboard: Rc<Dashboard>,
}

/// Grid of every player card, in rank order.
#[function_component(PlayersPage)]
pub fn players_page(props: &PlayersPageProps) -> Html {
    html! {
        <section class="players-view space-y-6" role="tabpanel">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
                { for props.dashboard.players.iter().map(|player| html! {
                    <PlayerCard key={player.id} player={player.clone()} />
                }) }
            </div>
        </section>
    }
}
