use super::content::COLLECTIONS;
use leptos::prelude::*;

/// Раздел "Линейки": активна ровно одна вкладка и одна панель
#[component]
pub fn CollectionsSection() -> impl IntoView {
    let active_tab = RwSignal::new(COLLECTIONS.first().map(|t| t.code).unwrap_or_default());

    view! {
        <section id="collections" class="section gray reveal">
            <div class="container section-header">
                <div>
                    <p class="eyebrow">"Линейки"</p>
                    <h2>"Решения под задачу"</h2>
                    <p class="lead">"Invisible, шпон, стекло и входные решения с терморазрывом."</p>
                </div>
                <div class="tabs" role="tablist">
                    {COLLECTIONS
                        .iter()
                        .map(|tab| {
                            let code = tab.code;
                            view! {
                                <button
                                    class="tab"
                                    role="tab"
                                    class:active=move || active_tab.get() == code
                                    on:click=move |_| active_tab.set(code)
                                >
                                    {tab.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {COLLECTIONS
                .iter()
                .map(|tab| {
                    let code = tab.code;
                    view! {
                        <div class="cards three tab-content" class:active=move || active_tab.get() == code>
                            {tab
                                .cards
                                .iter()
                                .map(|c| {
                                    view! {
                                        <article class="card">
                                            <h3>{c.title}</h3>
                                            <p>{c.text}</p>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
