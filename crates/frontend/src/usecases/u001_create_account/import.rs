use super::handoff::SecretKeyHandoff;
use crate::shared::components::dialog_frame::DialogFrame;
use crate::shared::components::main_title::MainTitle;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::services::use_navigator;
use contracts::domain::common::is_valid_secret_key;
use contracts::shared::routes;
use contracts::usecases::u001_create_account::FormError;
use leptos::prelude::*;
use thaw::*;

/// Trimmed secret key, if it is structurally valid
pub fn accept_imported_key(text: &str) -> Result<String, FormError> {
    let key = text.trim();
    if is_valid_secret_key(key) {
        Ok(key.to_string())
    } else {
        Err(FormError::InvalidSecretKey)
    }
}

/// Asks for an existing secret key and opens the creation page with it
#[component]
pub fn ImportKeyDialog(testnet: bool, on_close: Callback<()>) -> impl IntoView {
    let handoff = use_context::<SecretKeyHandoff>()
        .expect("SecretKeyHandoff not provided in context (provide it in app root)");
    let navigate = use_navigator();
    let secret_key = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let import = move || match secret_key.with_untracked(|text| accept_imported_key(text)) {
        Ok(key) => {
            handoff.offer(key);
            navigate(&routes::create_account(testnet));
        }
        Err(err) => error.set(Some(err.to_string())),
    };

    view! {
        <ModalFrame on_close=on_close>
            <DialogFrame
                top=move || view! {
                    <MainTitle title="Import Secret Key".to_string() on_back=on_close />
                }
                actions=move || view! {
                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| import()>
                            "Continue"
                        </Button>
                    </Flex>
                }
            >
                <div style="margin: 16px 0;">
                    <Input value=secret_key input_type=InputType::Password placeholder="Secret key (S...)" />
                    {move || error.get().map(|message| view! {
                        <div class="form-error" style="color: var(--colorPaletteRedForeground1); font-size: 12px; margin-top: 4px;">
                            {message}
                        </div>
                    })}
                </div>
            </DialogFrame>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_imported_key() {
        let key = "SBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";
        assert_eq!(accept_imported_key(&format!("  {key}\n")).unwrap(), key);
        assert_eq!(accept_imported_key("GBPB"), Err(FormError::InvalidSecretKey));
    }
}
