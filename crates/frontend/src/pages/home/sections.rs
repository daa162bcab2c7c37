//! Статичные секции: кейсы, услуги, материалы, процесс, отзывы, FAQ

use super::content::{
    InfoCard, CASES, CASE_SEGMENTS, CERTS, FAQ, MARQUEE, MATERIALS, PROCESS, SERVICES,
    TESTIMONIALS, WHY_US,
};
use crate::shared::anchor_scroll::AnchorLink;
use crate::shared::config::use_site_config;
use leptos::prelude::*;

fn info_cards(cards: &'static [InfoCard]) -> impl IntoView {
    cards
        .iter()
        .map(|c| {
            view! {
                <article class="card">
                    {(!c.pill.is_empty()).then(|| view! { <div class="pill">{c.pill}</div> })}
                    <h3>{c.title}</h3>
                    <p>{c.text}</p>
                </article>
            }
        })
        .collect_view()
}

/// Заголовок секции со ссылкой на форму заявки справа
#[component]
fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
    #[prop(optional)] cta: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="container section-header">
            <div>
                <p class="eyebrow">{eyebrow}</p>
                <h2>{title}</h2>
                {lead.map(|text| view! { <p class="lead">{text}</p> })}
            </div>
            {cta.map(|label| view! { <AnchorLink href="#contacts" class="link">{label}</AnchorLink> })}
        </div>
    }
}

#[component]
pub fn MarqueeSection() -> impl IntoView {
    view! {
        <section class="marquee reveal">
            <div class="container marquee-track">
                {MARQUEE.iter().map(|&item| view! { <span>{item}</span> }).collect_view()}
            </div>
        </section>
        <section class="certs reveal">
            <div class="container certs-grid">
                {CERTS
                    .iter()
                    .map(|&(mark, text)| {
                        view! {
                            <div class="cert">
                                <span>{mark}</span>
                                <p>{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CasesSection() -> impl IntoView {
    view! {
        <section id="cases" class="section reveal">
            <SectionHeader
                eyebrow="Кейсы"
                title="Как закрываем задачи заказчиков"
                lead="Материалы, акустика, сроки и интеграция в дизайн — коротко о главном."
                cta="Обсудить задачу →"
            />
            <div class="case-filters">
                {CASE_SEGMENTS
                    .iter()
                    .enumerate()
                    .map(|(idx, &segment)| view! { <span class="pill" class:alt={idx == 1}>{segment}</span> })
                    .collect_view()}
            </div>
            <div class="cases-grid">
                {CASES
                    .iter()
                    .map(|case| {
                        view! {
                            <article class="case-card">
                                <div class="case-header">
                                    <span class="pill" class:alt={case.accent}>{case.segment}</span>
                                    <span class="case-cta">{case.promise}</span>
                                </div>
                                <h3>{case.title}</h3>
                                <p class="muted">{case.text}</p>
                                <div class="case-meta">
                                    {case.meta.iter().map(|&m| view! { <span>{m}</span> }).collect_view()}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="section reveal">
            <SectionHeader
                eyebrow="Комплекс услуг"
                title="От идеи до идеальной установки"
                lead="Подбор, производство, монтаж и сервис — одна команда отвечает за результат."
                cta="Обсудить проект →"
            />
            <div class="cards three">{info_cards(SERVICES)}</div>
            <div class="service-cta">
                <div>
                    <p class="eyebrow">"Ускоренная подача"</p>
                    <h3>"Выезд и замер за 48 часов"</h3>
                    <p class="muted">"Подготовим смету и спецификацию сразу после замера, закрепим цены."</p>
                </div>
                <AnchorLink href="#contacts" class="primary-btn">
                    "Получить смету"
                </AnchorLink>
            </div>
        </section>

        <section id="materials" class="section gray reveal">
            <SectionHeader
                eyebrow="Материалы и фурнитура"
                title="Лучшее из Европы и точность производства"
                cta="Запросить подбор →"
            />
            <div class="cards three">{info_cards(MATERIALS)}</div>
        </section>
    }
}

#[component]
pub fn WhySection() -> impl IntoView {
    view! {
        <section id="why" class="section reveal">
            <SectionHeader
                eyebrow="Почему A-1 StroimDom"
                title="Чётко, прозрачно, премиально"
                lead="Движемся быстро, держим качество и даём предсказуемый результат."
            />
            <div class="cards three">{info_cards(WHY_US)}</div>
        </section>
    }
}

#[component]
pub fn ProcessSection() -> impl IntoView {
    let phone_href = use_site_config().contacts.phone_href;

    view! {
        <section id="process" class="section gray reveal">
            <SectionHeader eyebrow="Процесс" title="Прозрачно и под контроль" cta="Назначить встречу →" />
            <div class="timeline">
                {PROCESS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="timeline-item">
                                <div class="pill">{step.number}</div>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p>{step.text}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="cta section">
            <div class="container cta-box">
                <div>
                    <p class="eyebrow">"A-1 StroimDom"</p>
                    <h2>"Нужны двери мирового уровня?"</h2>
                    <p class="lead">"Расскажите о проекте — подготовим предложение и график."</p>
                </div>
                <div class="cta-actions">
                    <AnchorLink href="#contacts" class="primary-btn">
                        "Запросить предложение"
                    </AnchorLink>
                    <a class="ghost-btn" href=phone_href>
                        "Позвонить"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="section reveal testimonials">
            <SectionHeader eyebrow="Отзывы" title="Доверие профессионалов" />
            <div class="cards three">{info_cards(TESTIMONIALS)}</div>
        </section>
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="section gray reveal">
            <SectionHeader eyebrow="FAQ" title="Популярные вопросы" />
            <div class="accordion">
                {FAQ
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        view! {
                            <details open={idx == 0}>
                                <summary>{item.question}</summary>
                                <p>{item.answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
