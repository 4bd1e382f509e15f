use crate::dashboards::FunnelForecastPage;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <FunnelForecastPage />
        </ThemeProvider>
    }
}
