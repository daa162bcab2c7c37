use crate::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            // Сайт одностраничный: любой путь показывает главную
            <Routes fallback=|| view! { <HomePage /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
