use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct BadgeProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub tone: Option<f::Tone>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Outlined pill, e.g. `#3` rank marks and rarity tiers.
#[f::function_component(Badge)]
pub fn badge(props: &BadgeProps) -> f::Html {
    let mut classes = f::class_list(&["badge", "badge-outline"], &props.class);
    if let Some(tone) = props.tone {
        classes.push(tone.class("border"));
    }
    f::html! {
        <span class={classes}>{ props.label.clone() }</span>
    }
}
