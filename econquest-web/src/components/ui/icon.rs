use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct IconProps {
    /// Icon name in PascalCase, e.g. `TrendingUp`.
    pub name: f::AttrValue,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: f::Classes,
}

/// `TrendingUp` -> `trending-up`, `Building2` -> `building-2`.
#[must_use]
pub fn icon_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        let boundary = match prev {
            Some(p) => {
                (ch.is_ascii_uppercase() && !p.is_ascii_uppercase())
                    || (ch.is_ascii_digit() && !p.is_ascii_digit())
            }
            None => false,
        };
        if boundary {
            slug.push('-');
        }
        slug.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }
    slug
}

/// Placeholder glyph resolved by the icon stylesheet from `data-icon`.
#[f::function_component(Icon)]
pub fn icon(props: &IconProps) -> f::Html {
    let slug = icon_slug(&props.name);
    let mut class = f::class_list(&["icon"], &props.class);
    class.push(format!("icon-{slug}"));
    let style = format!("width:{0}px;height:{0}px", props.size);
    f::html! {
        <i class={class} data-icon={slug} style={style} aria-hidden="true"></i>
    }
}
