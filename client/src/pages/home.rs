//! Marketing home page: hero with the particle-graph background, feature
//! grid, stats band, and call-to-action.

use leptos::prelude::*;

use crate::components::network_canvas::NetworkCanvas;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// One feature card in the grid.
pub(crate) struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const FEATURES: &[Feature] = &[
    Feature {
        title: "Document Analysis",
        description: "AI-powered document review and compliance checking with real-time insights.",
    },
    Feature {
        title: "Risk Assessment",
        description: "Comprehensive risk evaluation with predictive analytics and mitigation strategies.",
    },
    Feature {
        title: "Regulatory Monitoring",
        description: "Stay updated with real-time regulatory changes and compliance requirements.",
    },
    Feature {
        title: "Team Collaboration",
        description: "Seamless collaboration tools for compliance teams with role-based access.",
    },
    Feature {
        title: "Alert Management",
        description: "Intelligent alerting system for compliance violations and deadline tracking.",
    },
    Feature {
        title: "Audit Trail",
        description: "Complete audit trail with detailed logging and compliance reporting.",
    },
];

pub(crate) const STATS: &[(&str, &str)] = &[
    ("99.9%", "Compliance Accuracy"),
    ("75%", "Time Reduction"),
    ("500+", "Enterprise Clients"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero__backdrop">
                    <NetworkCanvas/>
                </div>
                <div class="hero__content">
                    <span class="hero__badge">"AI-Powered Compliance Platform"</span>
                    <h1 class="hero__title">"RegIQ"</h1>
                    <p class="hero__tagline">
                        "Intelligent regulatory compliance management powered by advanced AI. \
                         Streamline your compliance processes, reduce risk, and stay ahead of \
                         regulatory changes."
                    </p>
                    <div class="hero__actions">
                        <a href="/login" class="btn btn--primary">"Get Started"</a>
                        <button class="btn btn--outline">"Watch Demo"</button>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="features__intro">
                    <h2>"Comprehensive Compliance Solutions"</h2>
                    <p>
                        "Our AI-driven platform provides end-to-end compliance management, from \
                         document analysis to risk assessment and regulatory monitoring."
                    </p>
                </div>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <h3 class="feature-card__title">{feature.title}</h3>
                                    <p class="feature-card__description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stats__item">
                                <div class="stats__value">{*value}</div>
                                <div class="stats__label">{*label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="cta">
                <h2>"Ready to Transform Your Compliance Management?"</h2>
                <p>"Join hundreds of organizations that trust RegIQ for their compliance needs."</p>
                <a href="/login" class="btn btn--primary">"Start Your Free Trial"</a>
            </section>
        </div>
    }
}
