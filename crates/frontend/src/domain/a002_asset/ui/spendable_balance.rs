use contracts::domain::a003_account_data::AccountData;
use contracts::projections::p003_spendable_balance::{RowKind, SpendableBreakdown};
use contracts::shared::decimal::{BalanceFormat, Decimal};
use leptos::prelude::*;

#[component]
pub fn SpendableBalanceBreakdown(
    #[prop(into)]
    account_data: Signal<AccountData>,
    base_reserve: Decimal,
    format: BalanceFormat,
) -> impl IntoView {
    let rows = move || {
        account_data.with(|data| match SpendableBreakdown::compute(data, base_reserve) {
            Ok(breakdown) => breakdown.rows(format),
            Err(err) => {
                log::error!("Cannot compute spendable balance of {}: {err}", data.public_key);
                Vec::new()
            }
        })
    };

    view! {
        <table class="spendable-breakdown" style="width: 100%; border-collapse: collapse;">
            <tbody>
                {move || {
                    rows()
                        .into_iter()
                        .map(|row| {
                            let (sign, style) = match row.kind {
                                RowKind::Balance => ("", ""),
                                RowKind::Deduction => ("- ", ""),
                                RowKind::Total => (
                                    "",
                                    "font-weight: bold; border-top: 1px solid rgba(0, 0, 0, 0.2);",
                                ),
                            };
                            view! {
                                <tr style=style>
                                    <td style="padding: 4px 0;">{row.label}</td>
                                    <td style="padding: 4px 0; text-align: right;">
                                        {format!("{sign}{}", row.value)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
