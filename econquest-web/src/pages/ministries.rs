use crate::components::ui::{Card, Icon, Progress};
use crate::i18n::{self, fmt_budget_thousands};
use econquest_core::{Dashboard, Ministry};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct MinistryCardProps {
    pub ministry: Ministry,
}

#[function_component(MinistryCard)]
pub fn ministry_card(props: &MinistryCardProps) -> Html {
    let m = &props.ministry;
    let header = html! {
        <div class="flex items-center gap-4">
            <div class="p-4 rounded-full bg-primary/10">
                <Icon name={m.icon.clone()} size={32} class={m.color.clone()} />
            </div>
            <h3 class="card-title text-xl">{ m.name.clone() }</h3>
        </div>
    };
    html! {
        <Card header={header} class={classes!("ministry-card", format!("ministry-{}", m.id), "hover-scale", "hover:border-primary", "transition-all")}>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <span class="text-muted-foreground">{ i18n::t("ministry.budget") }</span>
                    <span class="ministry-budget text-2xl font-bold text-secondary">{ fmt_budget_thousands(m.budget) }</span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-muted-foreground">{ i18n::t("ministry.decisions") }</span>
                    <span class="ministry-decisions text-xl font-bold">{ m.decisions.to_string() }</span>
                </div>
                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <span class="text-muted-foreground">{ i18n::t("ministry.influence") }</span>
                        <span class="ministry-influence font-bold">{ format!("{}%", m.influence) }</span>
                    </div>
                    <Progress percent={f32::from(m.influence)} label={i18n::t("ministry.influence")} class="h-3" />
                </div>
            </div>
            <div class="pt-4 border-t border-border">
                <button type="button" class="w-full py-3 px-4 bg-primary text-primary-foreground rounded-lg font-semibold flex items-center justify-center gap-2">
                    <Icon name="LogIn" size={20} />
                    { i18n::t("ministry.enter") }
                </button>
            </div>
        </Card>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MinistriesPageProps {
    pub dashboard: Rc<Dashboard>,
}

#[function_component(MinistriesPage)]
pub fn ministries_page(props: &MinistriesPageProps) -> Html {
    html! {
        <section class="ministries-view space-y-6" role="tabpanel">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                { for props.dashboard.ministries.iter().map(|m| html! {
                    <MinistryCard key={m.id.clone()} ministry={m.clone()} />
                }) }
            </div>
        </section>
    }
}
