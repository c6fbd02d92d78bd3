use helpdesk::labels::{Badge, priority_badge, status_badge};
use leptos::prelude::*;

fn badge_view(badge: Badge, aria_prefix: &'static str) -> impl IntoView {
    let class = format!(
        "{} inline-flex items-center rounded-full px-3 py-1 text-xs font-semibold",
        badge.tone.classes()
    );
    let label = format!("{} {}", aria_prefix, badge.text);
    view! {
        <span class=class aria-label=label>
            {badge.text}
        </span>
    }
}

#[component]
pub fn PriorityIndicator(#[prop(into)] priority: String) -> impl IntoView {
    badge_view(priority_badge(&priority), "Prioridade")
}

#[component]
pub fn StatusIndicator(#[prop(into)] status: String) -> impl IntoView {
    badge_view(status_badge(&status), "Status")
}
