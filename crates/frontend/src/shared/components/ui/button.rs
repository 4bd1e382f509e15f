use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
            ButtonVariant::Ghost => "button button--ghost",
        }
    }
}

/// Кнопка действия в шапке страницы.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Tooltip
    #[prop(optional)]
    title: Option<&'static str>,
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            title=title.unwrap_or_default()
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
