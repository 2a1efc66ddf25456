use contracts::domain::a002_asset::Asset;
use leptos::prelude::*;

/// Round asset badge: the issuer's image, or the asset code as fallback
#[component]
pub fn AssetLogo(
    asset: Asset,
    #[prop(into)]
    image_url: Signal<Option<String>>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let code = asset.code().to_string();
    let class = if class.is_empty() {
        "asset-logo".to_string()
    } else {
        format!("asset-logo {class}")
    };

    view! {
        <div
            class=class
            style="width: 96px; height: 96px; border-radius: 50%; overflow: hidden; display: flex; align-items: center; justify-content: center; font-size: 24px; box-shadow: 0 0 8px 2px rgba(0, 0, 0, 0.2); background: white;"
        >
            {move || match image_url.get() {
                Some(url) => view! {
                    <img src=url alt=code.clone() style="width: 100%; height: 100%;" />
                }
                .into_any(),
                None => view! { <span>{code.clone()}</span> }.into_any(),
            }}
        </div>
    }
}
