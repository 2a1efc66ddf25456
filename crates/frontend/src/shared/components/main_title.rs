use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title bar of pages and dialogs, with an optional back button
#[component]
pub fn MainTitle(
    #[prop(into)]
    title: Signal<String>,

    /// Shows a back arrow in front of the title
    #[prop(optional)]
    on_back: Option<Callback<()>>,

    /// Keep the title on one line, ellipsized
    #[prop(optional)]
    nowrap: bool,

    /// Actions on the right-hand side
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let title_style = if nowrap {
        "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;"
    } else {
        ""
    };

    view! {
        <div class="page-header main-title">
            <div class="page-header__content">
                {on_back.map(|on_back| view! {
                    <button
                        class="main-title__back"
                        title="Back"
                        on:click=move |_| on_back.run(())
                    >
                        {icon("back")}
                    </button>
                })}
                <h1 class="page-header__title" style=title_style>{move || title.get()}</h1>
            </div>
            <div class="page-header__actions">
                {children.map(|children| children())}
            </div>
        </div>
    }
}
