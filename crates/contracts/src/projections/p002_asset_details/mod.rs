//! Row composition for the asset details and issuer details panels.
//!
//! Each panel is a fixed, ordered list of row builders. A builder returns
//! `None` when its data is missing, which drops the row entirely.

use crate::domain::a002_asset::Asset;
use crate::domain::a003_account_data::AccountFlags;
use crate::shared::stellar_toml::{non_empty, CurrencyMetadata, OrgDocumentation};

pub const LUMEN_TITLE: &str = "Stellar Lumens (XLM)";
pub const LUMEN_DOMAIN: &str = "stellar.org";
pub const LUMEN_DESCRIPTION: &str = "The native token of the Stellar network.\n\n\
     Every account on the network has a lumens balance. Lumens are used to pay transaction fees.";

/// What clicking a row does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    CopyToClipboard(String),
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
    pub action: Option<RowAction>,
}

impl DetailRow {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            multiline: false,
            action: None,
        }
    }

    fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn on_click(mut self, action: RowAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Data behind the "Asset details" panel
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetDetailsInput<'a> {
    pub metadata: Option<&'a CurrencyMetadata>,
    pub issuer: Option<&'a str>,
    pub issuer_flags: Option<&'a AccountFlags>,
}

type AssetRowBuilder = for<'r, 'a> fn(&'r AssetDetailsInput<'a>) -> Option<DetailRow>;
type OrgRowBuilder = fn(&OrgDocumentation) -> Option<DetailRow>;

const ASSET_ROWS: &[AssetRowBuilder] = &[
    description_row,
    issuer_row,
    flags_row,
    conditions_row,
    anchor_row,
    redemption_row,
];

const ORGANIZATION_ROWS: &[OrgRowBuilder] = &[
    |doc| non_empty(&doc.org_name).map(|v| DetailRow::text("Organization name", v)),
    |doc| non_empty(&doc.org_dba).map(|v| DetailRow::text("Doing business as", v)),
    |doc| {
        non_empty(&doc.org_url)
            .map(|v| DetailRow::text("Website", v).on_click(RowAction::OpenLink(v.to_string())))
    },
    |doc| non_empty(&doc.org_description).map(|v| DetailRow::text("Description", v).multiline()),
    |doc| non_empty(&doc.org_physical_address).map(|v| DetailRow::text("Address", v).multiline()),
    |doc| {
        non_empty(&doc.org_official_email).map(|v| {
            DetailRow::text("Email address", v)
                .multiline()
                .on_click(RowAction::OpenLink(format!("mailto:{v}")))
        })
    },
    |doc| non_empty(&doc.org_phone_number).map(|v| DetailRow::text("Phone number", v).multiline()),
];

fn metadata_field<'a>(
    input: &AssetDetailsInput<'a>,
    field: fn(&CurrencyMetadata) -> &Option<String>,
) -> Option<&'a str> {
    input.metadata.and_then(|m| non_empty(field(m)))
}

fn description_row(input: &AssetDetailsInput<'_>) -> Option<DetailRow> {
    metadata_field(input, |m| &m.desc).map(|v| DetailRow::text("Description", v).multiline())
}

fn issuer_row(input: &AssetDetailsInput<'_>) -> Option<DetailRow> {
    input.issuer.map(|issuer| {
        DetailRow::text("Issuing account", issuer)
            .on_click(RowAction::CopyToClipboard(issuer.to_string()))
    })
}

fn flags_row(input: &AssetDetailsInput<'_>) -> Option<DetailRow> {
    input
        .issuer_flags
        .map(|flags| DetailRow::text("Account flags", flags.describe().join("\n")).multiline())
}

fn conditions_row(input: &AssetDetailsInput<'_>) -> Option<DetailRow> {
    metadata_field(input, |m| &m.conditions).map(|v| DetailRow::text("Conditions", v).multiline())
}

fn anchor_row(input: &AssetDetailsInput<'_>) -> Option<DetailRow> {
    let anchor_type = metadata_field(input, |m| &m.anchor_asset_type)?;
    let value = match metadata_field(input, |m| &m.anchor_asset) {
        Some(anchor) => format!("{} ({})", capitalize(anchor), capitalize(anchor_type)),
        None => capitalize(anchor_type),
    };
    Some(DetailRow::text("Anchored to", value).multiline())
}

fn redemption_row(input: &AssetDetailsInput<'_>) -> Option<DetailRow> {
    metadata_field(input, |m| &m.redemption_instructions)
        .map(|v| DetailRow::text("Redemption instructions", v).multiline())
}

/// Rows of the "Asset details" panel, in display order
pub fn asset_detail_rows(input: &AssetDetailsInput<'_>) -> Vec<DetailRow> {
    ASSET_ROWS.iter().filter_map(|build| build(input)).collect()
}

/// Rows of the "Issuer details" panel, in display order
pub fn organization_rows(doc: &OrgDocumentation) -> Vec<DetailRow> {
    ORGANIZATION_ROWS.iter().filter_map(|build| build(doc)).collect()
}

/// Logo shown next to the organization rows
pub fn organization_logo(doc: &OrgDocumentation) -> Option<&str> {
    non_empty(&doc.org_logo)
}

/// Dialog title: `Stellar Lumens (XLM)`, `US Dollar (USD)` or just the code
pub fn asset_title(asset: &Asset, metadata: Option<&CurrencyMetadata>) -> String {
    match asset {
        Asset::Native => LUMEN_TITLE.to_string(),
        Asset::Issued { code, .. } => match metadata.and_then(|m| non_empty(&m.name)) {
            Some(name) => format!("{name} ({code})"),
            None => code.clone(),
        },
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
