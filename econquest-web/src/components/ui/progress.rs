use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProgressProps {
    /// Fill in percent; values outside 0..=100 are clamped.
    pub percent: f32,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Progress)]
pub fn progress(props: &ProgressProps) -> f::Html {
    let class = f::class_list(&["progress", "w-full"], &props.class);
    let value = props.percent.clamp(0.0, 100.0).round();
    f::html! {
        <progress
            class={class}
            value={value.to_string()}
            max="100"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={value.to_string()}
            aria-label={props.label.clone()}
        ></progress>
    }
}
