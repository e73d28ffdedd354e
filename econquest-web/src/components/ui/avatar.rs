use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct AvatarProps {
    pub text: f::AttrValue,
    #[prop_or(f::Size::Md)]
    pub size: f::Size,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Round fallback avatar showing a short text, here the player id.
#[f::function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> f::Html {
    let mut classes = f::class_list(&["avatar", "border-2", "border-primary"], &props.class);
    classes.push(props.size.square());
    f::html! {
        <div class={classes}>
            <span class="avatar-fallback bg-primary text-primary-foreground font-bold" aria-hidden="true">
                { props.text.clone() }
            </span>
        </div>
    }
}
