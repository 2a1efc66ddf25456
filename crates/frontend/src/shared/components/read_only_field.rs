use crate::shared::clipboard::use_clipboard;
use crate::shared::links::open_link;
use contracts::projections::p002_asset_details::{DetailRow, RowAction};
use leptos::prelude::*;

/// Labelled read-only value
#[component]
pub fn ReadOnlyField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    /// Keep line breaks of the value
    #[prop(optional)]
    multiline: bool,
    /// Makes the value clickable
    #[prop(default = None)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let mut value_style = String::from("text-overflow: ellipsis; overflow: hidden;");
    if multiline {
        value_style.push_str(" white-space: pre-wrap;");
    }
    if clickable {
        value_style.push_str(" cursor: pointer; text-decoration: underline;");
    }

    view! {
        <div class="read-only-field" style="margin: 8px 0 4px;">
            <label class="read-only-field__label" style="display: block; font-size: 12px; opacity: 0.7;">
                {label}
            </label>
            <div
                class="read-only-field__value"
                style=value_style
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            >
                {move || value.get()}
            </div>
        </div>
    }
}

/// Renders composed detail rows; clicks run the row's action
#[component]
pub fn DetailRows(rows: Vec<DetailRow>) -> impl IntoView {
    let copy = use_clipboard();

    rows.into_iter()
        .map(|row| {
            let on_click = row.action.map(|action| {
                Callback::new(move |_| match &action {
                    RowAction::CopyToClipboard(text) => copy(text.as_str()),
                    RowAction::OpenLink(url) => open_link(url),
                })
            });
            view! {
                <ReadOnlyField
                    label=row.label
                    value=row.value
                    multiline=row.multiline
                    on_click=on_click
                />
            }
        })
        .collect_view()
}
