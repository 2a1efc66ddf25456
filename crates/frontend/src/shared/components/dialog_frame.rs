use leptos::prelude::*;

/// Dialog layout: fixed top area, scrolling content, optional bottom actions
#[component]
pub fn DialogFrame(
    #[prop(into)]
    top: ViewFn,
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-frame" style="display: flex; flex-direction: column; max-height: 100%;">
            <div class="dialog-frame__top" style="position: relative; flex: 0 0 auto;">
                {top.run()}
            </div>
            <div class="dialog-frame__content" style="flex: 1 1 auto; overflow-y: auto;">
                {children()}
            </div>
            {actions.map(|actions| view! {
                <div class="dialog-frame__actions" style="flex: 0 0 auto;">
                    {actions.run()}
                </div>
            })}
        </div>
    }
}
