//! CardAnimated: обёртка над Thaw Card с анимацией появления и заголовком секции.
//!
//! # Пример
//! ```ignore
//! <CardAnimated title="Ads Level" delay_ms=80>
//!     <p>"Контент"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Заголовок секции (optional)
    #[prop(optional, into)]
    title: Option<String>,
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {title.map(|t| view! { <div class="section__title">{t}</div> })}
            {children()}
        </Card>
    }
}
