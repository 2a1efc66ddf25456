use crate::shared::clipboard::use_clipboard;
use crate::shared::components::dialog_frame::DialogFrame;
use crate::shared::components::main_title::MainTitle;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// One-time secret key backup shown after creating a production account.
/// The overlay does not close it; only the confirmation does.
#[component]
pub fn BackupDialog(secret_key: String, on_confirm: Callback<()>) -> impl IntoView {
    let copy = use_clipboard();
    let key = StoredValue::new(secret_key);

    view! {
        <ModalFrame on_close=on_confirm close_on_overlay=false>
            <DialogFrame
                top=|| view! { <MainTitle title="Back up your secret key".to_string() /> }
                actions=move || view! {
                    <Flex justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            "I have written it down"
                        </Button>
                    </Flex>
                }
            >
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        "This key is the only way to recover the account. Store it somewhere safe and never share it."
                    </MessageBarBody>
                </MessageBar>
                <Flex align=FlexAlign::Center gap=FlexGap::Small attr:style="margin: 16px 0;">
                    <code class="backup__secret" style="word-break: break-all; font-size: 14px;">
                        {key.get_value()}
                    </code>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| key.with_value(|key| copy(key.as_str()))
                    >
                        {icon("copy")}
                    </Button>
                </Flex>
            </DialogFrame>
        </ModalFrame>
    }
}
