use super::backup::BackupDialog;
use super::handoff::SecretKeyHandoff;
use super::view_model::{parse_create_account_query, CreateAccountViewModel};
use crate::shared::components::main_title::MainTitle;
use crate::shared::config::use_wallet_config;
use contracts::usecases::u001_create_account::FormField;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use thaw::*;

fn field_error(vm: CreateAccountViewModel, field: FormField) -> impl IntoView {
    move || {
        vm.field_error(field).map(|message| {
            view! {
                <div class="form-error" style="color: var(--colorPaletteRedForeground1); font-size: 12px; margin-top: 4px;">
                    {message}
                </div>
            }
        })
    }
}

/// `imported_secret_key` opens the form for an existing key; without it a key
/// offered through `SecretKeyHandoff` is used, if any.
#[component]
pub fn CreateAccountPage(
    #[prop(default = None)]
    imported_secret_key: Option<String>,
) -> impl IntoView {
    let query = use_location()
        .search
        .with_untracked(|search| parse_create_account_query(search));
    let network = query.network(use_wallet_config().ledger.default_network);
    let prefilled = imported_secret_key.or_else(|| {
        use_context::<SecretKeyHandoff>().and_then(|handoff| handoff.take())
    });
    let vm = CreateAccountViewModel::new(network, prefilled);

    view! {
        <div id="u001_create_account" class="page" style="max-width: 600px;">
            <MainTitle
                title=vm.title().to_string()
                on_back=Callback::new(move |_| vm.cancel())
            />

            {vm.network.is_testnet().then(|| view! {
                <MessageBar intent=MessageBarIntent::Info>
                    <MessageBarBody>"Testnet accounts hold test lumens without any value."</MessageBarBody>
                </MessageBar>
            })}

            <Flex vertical=true gap=FlexGap::Large attr:style="margin-top: 16px;">
                <div>
                    <label class="form-label">"Account name"</label>
                    <Input value=vm.name placeholder="Account name" />
                    {field_error(vm, FormField::Name)}
                </div>

                <div>
                    <Checkbox checked=vm.create_new_key label="Generate a new secret key" />
                    <Show when=move || !vm.create_new_key.get()>
                        <Input value=vm.imported_secret_key placeholder="Secret key (S...)" />
                        {field_error(vm, FormField::SecretKey)}
                    </Show>
                </div>

                <div>
                    <Checkbox checked=vm.set_password label="Protect with a password" />
                    <Show when=move || vm.set_password.get()>
                        <Flex vertical=true gap=FlexGap::Small>
                            <div>
                                <Input value=vm.password input_type=InputType::Password placeholder="Password" />
                                {field_error(vm, FormField::Password)}
                            </div>
                            <div>
                                <Input
                                    value=vm.repeated_password
                                    input_type=InputType::Password
                                    placeholder="Repeat password"
                                />
                                {field_error(vm, FormField::RepeatedPassword)}
                            </div>
                        </Flex>
                    </Show>
                </div>

                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_submitting())
                        on_click=move |_| vm.submit()
                    >
                        {move || if vm.is_submitting() { "Creating..." } else { "Add account" }}
                    </Button>
                </Flex>
            </Flex>

            {move || vm.pending_backup_key().map(|secret_key| view! {
                <BackupDialog
                    secret_key=secret_key
                    on_confirm=Callback::new(move |_| vm.confirm_backup())
                />
            })}
        </div>
    }
}
