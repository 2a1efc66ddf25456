//! Anchored popup menu with click-away closing.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        icon: &'static str,
        disabled: bool,
        hidden: bool,
        on_select: Callback<()>,
    },
    Divider,
}

/// Open/closed state shared by the anchor and the menu
#[derive(Clone, Copy)]
pub struct ContextMenuState {
    open: RwSignal<bool>,
}

impl ContextMenuState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Close the menu first, then run `callback`
    pub fn close_and_call(&self, callback: Callback<()>) -> Callback<()> {
        let state = *self;
        Callback::new(move |_| {
            state.close();
            callback.run(());
        })
    }
}

impl Default for ContextMenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ContextMenu(
    entries: Vec<MenuEntry>,
    /// Tooltip of the anchor button
    #[prop(optional, into)]
    anchor_title: String,
) -> impl IntoView {
    let state = ContextMenuState::new();

    view! {
        <div class="context-menu" style="position: relative; display: inline-block;">
            <Button
                appearance=ButtonAppearance::Subtle
                attr:title=anchor_title
                on_click=move |_| state.toggle()
            >
                {icon("more")}
            </Button>
            <Show when=move || state.is_open()>
                <div
                    class="context-menu__backdrop"
                    style="position: fixed; inset: 0; z-index: 1099;"
                    on:click=move |_| state.close()
                ></div>
                <ul
                    class="context-menu__list"
                    role="menu"
                    style="position: absolute; right: 0; z-index: 1100; min-width: 220px; margin: 0; padding: 0; list-style: none; background: var(--colorNeutralBackground1, #fff); box-shadow: 0 2px 8px rgba(0, 0, 0, 0.2); border-radius: 4px;"
                >
                    {visible_entries(entries.clone())
                        .into_iter()
                        .map(|entry| render_entry(entry, state))
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

/// Drops hidden items; dividers stay in place
fn visible_entries(entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    entries
        .into_iter()
        .filter(|entry| !matches!(entry, MenuEntry::Item { hidden: true, .. }))
        .collect()
}

fn render_entry(entry: MenuEntry, state: ContextMenuState) -> AnyView {
    match entry {
        MenuEntry::Divider => view! {
            <li role="separator" style="border-top: 1px solid rgba(0, 0, 0, 0.12); margin: 4px 0;"></li>
        }
        .into_any(),
        MenuEntry::Item {
            label,
            icon: icon_name,
            disabled,
            on_select,
            ..
        } => {
            let select = state.close_and_call(on_select);
            let style = if disabled {
                "display: flex; align-items: center; gap: 24px; padding: 12px 16px; opacity: 0.4; cursor: default;"
            } else {
                "display: flex; align-items: center; gap: 24px; padding: 12px 16px; cursor: pointer;"
            };
            view! {
                <li
                    role="menuitem"
                    aria-disabled=disabled.to_string()
                    style=style
                    on:click=move |_| {
                        if !disabled {
                            select.run(());
                        }
                    }
                >
                    <span style="flex: 0 0 24px;">{icon(icon_name)}</span>
                    <span>{label}</span>
                </li>
            }
            .into_any()
        }
    }
}
