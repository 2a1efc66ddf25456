//! Collapsible card used for the detail panels.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn ExpandableCard(
    #[prop(into)]
    title: String,
    /// Start expanded
    #[prop(optional)]
    expanded: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let expanded = RwSignal::new(expanded);

    view! {
        <Card attr:class="detail-card" attr:style="margin: 12px 0; border-radius: 8px;">
            <div
                class="detail-card__summary"
                style="display: flex; justify-content: space-between; align-items: center; cursor: pointer; min-height: 48px;"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                <h2 class="detail-card__title" style="font-size: 20px; font-weight: 400; margin: 0;">{title}</h2>
                <span
                    class="detail-card__chevron"
                    style=move || if expanded.get() { "transform: rotate(180deg);" } else { "" }
                >
                    {icon("chevron-down")}
                </span>
            </div>
            <Show when=move || expanded.get()>
                <div class="detail-card__content" style="display: flex; flex-direction: column; position: relative;">
                    {children()}
                </div>
            </Show>
        </Card>
    }
}
