use dioxus::prelude::*;

/// CSS custom properties consumed by the backdrop's radial gradient.
pub fn glow_style(x: f64, y: f64) -> String {
    format!("--mouse-x: {x:.0}px; --mouse-y: {y:.0}px")
}

/// Page wrapper whose backdrop gradient follows the pointer.
#[component]
pub fn PointerGlow(children: Element) -> Element {
    let mut pointer = use_signal(|| Option::<(f64, f64)>::None);
    let style = pointer().map(|(x, y)| glow_style(x, y)).unwrap_or_default();

    rsx! {
        div {
            class: "glow-page",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.element_coordinates();
                pointer.set(Some((point.x, point.y)));
            },
            div { class: "glow-page__backdrop", style: "{style}" }
            div { class: "glow-page__content", {children} }
        }
    }
}
