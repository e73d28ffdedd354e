use crate::components::ui::foundation as f;
use crate::components::ui::icon::Icon;
use crate::i18n;
use econquest_core::DashboardView;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ViewTabsProps {
    pub active: DashboardView,
    #[prop_or_default]
    pub on_select: f::Callback<DashboardView>,
}

fn tab_label(view: DashboardView) -> String {
    i18n::t(&format!("tabs.{}", view.as_str()))
}

/// Three-way exclusive tab strip over the dashboard views.
#[f::function_component(ViewTabs)]
pub fn view_tabs(props: &ViewTabsProps) -> f::Html {
    f::html! {
        <nav class="tabs-list grid w-full grid-cols-3 mb-8 h-14" role="tablist" aria-label={i18n::t("nav.views")}>
            { for DashboardView::ALL.into_iter().map(|view| {
                let selected = view == props.active;
                let class = f::classes!(
                    "tabs-trigger",
                    "text-base",
                    format!("tab-{}", view.as_str()),
                    selected.then_some("tab-active")
                );
                let onclick = {
                    let on_select = props.on_select.clone();
                    f::Callback::from(move |_| on_select.emit(view))
                };
                f::html! {
                    <button type="button" class={class} role="tab" aria-selected={selected.to_string()} {onclick}>
                        <Icon name={view.icon()} size={20} class="mr-2" />
                        { tab_label(view) }
                    </button>
                }
            }) }
        </nav>
    }
}
