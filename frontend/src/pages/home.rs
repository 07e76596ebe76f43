use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::counter::StatCounter;
use crate::components::reveal::Reveal;
use crate::config;
use crate::forms::form::ValidatedForm;
use crate::forms::rules::{CONTACT_FORM, NEWSLETTER_FORM};
use crate::pages::faq::FaqSection;

const CHART_BARS: &[u32] = &[45, 70, 55, 85, 65, 95];

const SERVICES: &[(&str, &str, &str)] = &[
    ("💻", "Web Development", "Fast, accessible websites and web apps built on modern, maintainable stacks."),
    ("📱", "Mobile Apps", "Native and cross-platform apps that feel at home on every device."),
    ("☁️", "Cloud & DevOps", "Infrastructure, CI/CD and monitoring so your releases stay boring."),
    ("🎨", "Product Design", "Research-led UX and UI design that turns ideas into usable products."),
];

const SOLUTIONS: &[(&str, &str)] = &[
    ("Startups", "Go from idea to launched MVP in weeks with a team that has done it before."),
    ("Growing Teams", "Add senior engineers to your roadmap without the hiring overhead."),
    ("Enterprises", "Modernise legacy systems with careful, incremental migrations."),
];

const STATS: &[(u32, &str)] = &[
    (150, "Projects Delivered"),
    (98, "Happy Clients"),
    (12, "Countries Served"),
    (25, "Team Members"),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Digital Crew rebuilt our booking platform in three months. Conversions went up 40% the week we launched.",
        "Sarah Mitchell",
        "CEO, TravelNest",
    ),
    (
        "They felt like part of our own team from day one. Clear communication and no surprises on the invoice.",
        "David Chen",
        "CTO, Finlytics",
    ),
    (
        "Our app store rating went from 3.1 to 4.7 after their redesign. I can't recommend them enough.",
        "Amara Okafor",
        "Product Lead, FitLoop",
    ),
];

const TEAM_FEATURES: &[(&str, &str)] = &[
    ("Senior by default", "Every project is staffed with engineers who have shipped production software for years."),
    ("Transparent process", "Weekly demos, shared boards and direct access to the people doing the work."),
    ("Built to hand over", "Documentation and knowledge transfer are part of every engagement, not an extra."),
];

/// CSS `animation-delay` for the hero chart bar at `index`.
pub fn chart_bar_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * config::CHART_STAGGER_STEP_SECS)
}

#[function_component(HeroChart)]
fn hero_chart() -> Html {
    let staggered = use_state(|| false);

    {
        let staggered = staggered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::CHART_STAGGER_START_MS, move || staggered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="hero-chart">
            { for CHART_BARS.iter().enumerate().map(|(index, height)| {
                let mut style = format!("height: {}%;", height);
                if *staggered {
                    style.push_str(&format!(" animation-delay: {};", chart_bar_delay(index)));
                }
                html! { <div key={index} class="chart-bar" {style}></div> }
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <div class="container hero-container">
                    <div class="hero-content">
                        <h1 class="hero-title">{"Software that moves your business forward"}</h1>
                        <p class="hero-subtitle">
                            {"Digital Crew Solution designs, builds and runs web and mobile products for startups and growing companies."}
                        </p>
                        <div class="hero-buttons">
                            <AnchorLink href="#contact" class="btn btn-primary">{"Start a Project"}</AnchorLink>
                            <AnchorLink href="#services" class="btn btn-secondary">{"Our Services"}</AnchorLink>
                        </div>
                    </div>
                    <HeroChart />
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"What We Do"}</h2>
                        <p class="section-subtitle">{"End-to-end delivery, from the first sketch to production."}</p>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <Reveal class="service-card" key={*title}>
                                <div class="service-icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="solutions" class="solutions">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"Solutions For Every Stage"}</h2>
                    </div>
                    <div class="solutions-grid">
                        { for SOLUTIONS.iter().map(|(title, text)| html! {
                            <Reveal class="solution-card" key={*title}>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                                <AnchorLink href="#contact" class="btn btn-primary">{"Talk to Us"}</AnchorLink>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().map(|(target, label)| html! {
                        <StatCounter key={*label} target={*target} label={*label} />
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"What Clients Say"}</h2>
                    </div>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                            <Reveal class="testimonial-card" key={*name}>
                                <p class="testimonial-quote">{ format!("“{}”", quote) }</p>
                                <div class="testimonial-author">
                                    <strong>{ *name }</strong>
                                    <span>{ *role }</span>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="team" class="team">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"Why Work With Us"}</h2>
                    </div>
                    <div class="team-grid">
                        { for TEAM_FEATURES.iter().map(|(title, text)| html! {
                            <Reveal class="team-feature" key={*title}>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <FaqSection />

            <section id="contact" class="contact">
                <div class="container contact-container">
                    <div class="contact-info">
                        <h2 class="section-title">{"Let's Build Something"}</h2>
                        <p>{"Tell us what you are working on and we will get back to you within one business day."}</p>
                        <ul class="contact-details">
                            <li>{"📧 hello@digitalcrew.solutions"}</li>
                            <li>{"📍 Remote-first, worldwide"}</li>
                        </ul>
                    </div>
                    <ValidatedForm spec={&CONTACT_FORM} class="contact-form" button_class="btn btn-primary btn-full" />
                </div>
            </section>

            <section id="newsletter" class="newsletter">
                <div class="container newsletter-container">
                    <div>
                        <h2>{"Stay in the loop"}</h2>
                        <p>{"One email a month with case studies and engineering notes. No spam."}</p>
                    </div>
                    <ValidatedForm spec={&NEWSLETTER_FORM} class="newsletter-form" button_class="btn btn-newsletter" />
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-container">
                    <span>{"© Digital Crew Solution"}</span>
                    <AnchorLink href="#home" class="footer-link">{"Back to top ↑"}</AnchorLink>
                </div>
            </footer>

            <style>
                {r#"
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                section {
                    padding: 5rem 0;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }
                .section-subtitle {
                    color: #6b7280;
                    font-size: 1.1rem;
                }
                .btn {
                    display: inline-block;
                    padding: 0.85rem 1.75rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .btn:hover {
                    transform: translateY(-2px);
                }
                .btn:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                    transform: none;
                }
                .btn-primary {
                    background: #2563eb;
                    color: #fff;
                }
                .btn-secondary {
                    background: transparent;
                    color: #2563eb;
                    border: 2px solid #2563eb;
                }
                .btn-newsletter {
                    background: #111827;
                    color: #fff;
                }
                .btn-full {
                    width: 100%;
                }

                .hero {
                    padding-top: 8rem;
                    background: linear-gradient(135deg, #eff6ff 0%, #ffffff 100%);
                }
                .hero-container {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-title {
                    font-size: 3rem;
                    line-height: 1.15;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-chart {
                    display: flex;
                    align-items: flex-end;
                    gap: 0.75rem;
                    height: 280px;
                    padding: 1.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 20px 40px rgba(37, 99, 235, 0.1);
                }
                .chart-bar {
                    flex: 1;
                    border-radius: 0.5rem 0.5rem 0 0;
                    background: linear-gradient(180deg, #60a5fa, #2563eb);
                    transform-origin: bottom;
                    animation: growBar 1s ease both;
                }
                @keyframes growBar {
                    from { transform: scaleY(0); }
                    to { transform: scaleY(1); }
                }

                .services-grid, .solutions-grid, .testimonials-grid, .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .service-card, .solution-card, .testimonial-card, .team-feature {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .fade-in {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .page-hidden .chart-bar {
                    animation-play-state: paused;
                }

                .stats {
                    background: #111827;
                    color: #fff;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-number {
                    display: block;
                    font-size: 2.75rem;
                    font-weight: 700;
                    color: #60a5fa;
                }
                .stat-label {
                    color: #d1d5db;
                }

                .testimonial-quote {
                    font-style: italic;
                    color: #374151;
                    margin-bottom: 1.25rem;
                }
                .testimonial-author {
                    display: flex;
                    flex-direction: column;
                    color: #6b7280;
                }

                .contact-container {
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 3rem;
                }
                .form-group {
                    margin-bottom: 1.25rem;
                    display: flex;
                    flex-direction: column;
                }
                .form-group label {
                    font-weight: 500;
                    margin-bottom: 0.4rem;
                    color: #374151;
                }
                .form-group input, .form-group textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .error-message {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }

                .newsletter {
                    background: #eff6ff;
                }
                .newsletter-container {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                }
                .newsletter-form {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-end;
                    flex-wrap: wrap;
                }
                .newsletter-form .form-group {
                    margin-bottom: 0;
                }

                .footer {
                    padding: 2rem 0;
                    border-top: 1px solid #e5e7eb;
                }
                .footer-container {
                    display: flex;
                    justify-content: space-between;
                }
                .footer-link {
                    color: #2563eb;
                    text-decoration: none;
                }
                .keyboard-navigation a:focus, .keyboard-navigation button:focus,
                .keyboard-navigation input:focus, .keyboard-navigation textarea:focus {
                    outline: 3px solid #93c5fd;
                    outline-offset: 2px;
                }

                @media (max-width: 768px) {
                    .hero-container, .contact-container {
                        grid-template-columns: 1fr;
                    }
                    .hero-title {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_bars_are_staggered_by_a_fifth_of_a_second() {
        assert_eq!(chart_bar_delay(0), "0.0s");
        assert_eq!(chart_bar_delay(1), "0.2s");
        assert_eq!(chart_bar_delay(3), "0.6s");
        assert_eq!(chart_bar_delay(5), "1.0s");
    }
}
