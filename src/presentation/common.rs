/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::impl_decode_for_enum;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Gaming platform an order or a statistic belongs to
///
/// Sent as the `Platform` request header.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// PC
    #[default]
    Pc,
    /// Xbox
    Xbox,
    /// PlayStation
    Ps4,
    /// Nintendo Switch
    Switch,
}

impl Platform {
    /// Value sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Xbox => "xbox",
            Platform::Ps4 => "ps4",
            Platform::Switch => "switch",
        }
    }
}

/// Locale of localized texts
///
/// Sent as the `Language` request header.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en")]
    En,
    /// Russian
    #[serde(rename = "ru")]
    Ru,
    /// Korean
    #[serde(rename = "ko")]
    Ko,
    /// French
    #[serde(rename = "fr")]
    Fr,
    /// Swedish
    #[serde(rename = "sv")]
    Sv,
    /// German
    #[serde(rename = "de")]
    De,
    /// Traditional Chinese
    #[serde(rename = "zh-hant", alias = "zh_hant")]
    ZhHant,
    /// Simplified Chinese
    #[serde(rename = "zh-hans", alias = "zh_hans")]
    ZhHans,
    /// Portuguese
    #[serde(rename = "pt")]
    Pt,
    /// Spanish
    #[serde(rename = "es")]
    Es,
    /// Polish
    #[serde(rename = "pl")]
    Pl,
    /// Czech
    #[serde(rename = "cs")]
    Cs,
    /// Ukrainian
    #[serde(rename = "uk")]
    Uk,
}

impl Language {
    /// Value sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ko => "ko",
            Language::Fr => "fr",
            Language::Sv => "sv",
            Language::De => "de",
            Language::ZhHant => "zh-hant",
            Language::ZhHans => "zh-hans",
            Language::Pt => "pt",
            Language::Es => "es",
            Language::Pl => "pl",
            Language::Cs => "cs",
            Language::Uk => "uk",
        }
    }
}

/// Related sub-resource the server should attach under `include`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IncludeOption {
    /// Attach the item and its item set
    Item,
}

impl IncludeOption {
    /// Value sent as the `include` query parameter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IncludeOption::Item => "item",
        }
    }
}

impl_decode_for_enum!(Platform, Language, IncludeOption);
