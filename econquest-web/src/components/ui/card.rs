use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub header: Option<f::Html>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "bg-card", "border-border"], &props.class);
    f::html! {
        <article class={class}>
            { props.header.clone().map(|header| f::html! {
                <header class="card-header">{ header }</header>
            }).unwrap_or_default() }
            <div class="card-content">
                { for props.children.iter() }
            </div>
        </article>
    }
}
