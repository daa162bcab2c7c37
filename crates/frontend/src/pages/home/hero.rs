use super::content::{HERO_CHIPS, STATS};
use crate::shared::anchor_scroll::AnchorLink;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="hero hero-full reveal">
            <div class="hero-bg hero-aurora"></div>
            <div class="hero-bg hero-gridlines"></div>
            <div class="hero-bg hero-burst"></div>
            <div class="container hero-grid">
                <div class="hero-brand-panel glass-hero-card">
                    <div class="brand-mark">"A-1"</div>
                    <p class="eyebrow">"Welcome"</p>
                    <h1 class="serif hero-title">"A-1 StroimDom"</h1>
                    <h2 class="hero-subtitle">
                        "Двери, которые дают вау-эффект и поддерживают архитектуру интерьера"
                    </h2>
                    <p class="lead">
                        "Скрытые системы, благородные шпоны, стекло и входные решения с терморазрывом. "
                        "Мы закрываем подбор, производство, монтаж и сервис одной командой."
                    </p>
                    <div class="hero-chips">
                        {HERO_CHIPS
                            .iter()
                            .map(|&(label, alt)| view! { <span class="pill" class:alt=alt>{label}</span> })
                            .collect_view()}
                    </div>
                    <div class="hero-actions">
                        <AnchorLink href="#contacts" class="primary-btn">
                            "Запросить замер"
                        </AnchorLink>
                        <AnchorLink href="#cases" class="ghost-btn">
                            "Смотреть кейсы"
                        </AnchorLink>
                    </div>
                    <div class="stats">
                        {STATS
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <div class="stat-card">
                                        <div class="stat-glow"></div>
                                        <strong>{value}</strong>
                                        <span>{label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero-visual wow">
                    <div
                        class="hero-photo hero-cover"
                        style="background-image: url('/works/IMG_5859.jpeg')"
                    >
                        <div class="hero-overlay-card">
                            <p class="eyebrow">"Signature Invisible"</p>
                            <h3>"Монолитные полотна"</h3>
                            <p class="muted">
                                "Стыки 2 мм, акустика 36–42 дБ, скрытые петли, магнитный притвор."
                            </p>
                            <div class="hero-mini-meta">
                                <span>"Simonswerk"</span>
                                <span>"AGB"</span>
                                <span>"RAL / Шпон АА"</span>
                            </div>
                        </div>
                    </div>
                    <div class="floating-tag">"Объект: резиденция, Барвиха"</div>
                </div>
            </div>
        </section>
    }
}
