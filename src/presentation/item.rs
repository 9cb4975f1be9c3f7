/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::presentation::common::Language;
use crate::{impl_decode_for_enum, record};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Rarity of an item, mostly relevant for mods and relics
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Common
    Common,
    /// Uncommon
    Uncommon,
    /// Rare
    Rare,
    /// Legendary
    Legendary,
    /// Peculiar
    Peculiar,
}

/// Orientation of an item icon
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    /// Landscape
    Land,
    /// Portrait
    Port,
}

impl_decode_for_enum!(Rarity, IconFormat);

record! {
    /// Item entry of the `/items` listing
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct ItemShort {
        /// Item identifier
        pub id: String,
        /// URL-safe unique name
        pub url_name: String,
        /// Display name in the requested language
        pub item_name: String,
        /// Thumbnail path
        pub thumb: String,
        /// Whether the item is vaulted, when known
        pub vaulted: Option<bool>,
    }
}

record! {
    /// Where an item drops
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct DropSource {
        /// Name of the source
        pub name: String,
        /// Link to the source, if any
        pub link: Option<String>,
    }
}

record! {
    /// Texts of an item in one locale
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct LangInItem {
        /// Localized item name
        pub item_name: String,
        /// Localized description
        pub description: String,
        /// Wiki page
        pub wiki_link: Option<String>,
        /// Drop sources
        pub drop: Vec<DropSource>,
    }
}

record! {
    /// Full description of one item of an item set
    ///
    /// Locale blocks other than `en` may be missing. Their fields use the
    /// underscore spelling (`zh_hant`); see [`crate::model::normalize`].
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct ItemFull {
        /// Item identifier
        pub id: String,
        /// URL-safe unique name
        pub url_name: String,
        /// Icon path
        pub icon: String,
        /// Icon orientation
        pub icon_format: Option<IconFormat>,
        /// Thumbnail path
        pub thumb: String,
        /// Secondary icon, e.g. for set parts
        pub sub_icon: Option<String>,
        /// Maximum rank for mods
        pub mod_max_rank: Option<i64>,
        /// Subtypes, e.g. relic refinements
        pub subtypes: Option<Vec<String>>,
        /// Tags
        pub tags: Vec<String>,
        /// Ducat value
        pub ducats: Option<i64>,
        /// Copies needed to complete the set
        pub quantity_for_set: Option<i64>,
        /// Whether this is the set itself
        pub set_root: Option<bool>,
        /// Mastery rank required
        pub mastery_level: Option<i64>,
        /// Rarity
        pub rarity: Option<Rarity>,
        /// Trading tax in credits
        pub trading_tax: Option<i64>,
        /// English texts, always present
        pub en: LangInItem,
        /// Russian texts
        pub ru: Option<LangInItem>,
        /// Korean texts
        pub ko: Option<LangInItem>,
        /// French texts
        pub fr: Option<LangInItem>,
        /// German texts
        pub de: Option<LangInItem>,
        /// Swedish texts
        pub sv: Option<LangInItem>,
        /// Traditional Chinese texts
        pub zh_hant: Option<LangInItem>,
        /// Simplified Chinese texts
        pub zh_hans: Option<LangInItem>,
        /// Portuguese texts
        pub pt: Option<LangInItem>,
        /// Spanish texts
        pub es: Option<LangInItem>,
        /// Polish texts
        pub pl: Option<LangInItem>,
        /// Czech texts
        pub cs: Option<LangInItem>,
        /// Ukrainian texts
        pub uk: Option<LangInItem>,
    }
}

impl ItemFull {
    /// Texts for `language`, falling back to English when that locale is absent
    #[must_use]
    pub fn texts(&self, language: Language) -> &LangInItem {
        let localized = match language {
            Language::En => None,
            Language::Ru => self.ru.as_ref(),
            Language::Ko => self.ko.as_ref(),
            Language::Fr => self.fr.as_ref(),
            Language::De => self.de.as_ref(),
            Language::Sv => self.sv.as_ref(),
            Language::ZhHant => self.zh_hant.as_ref(),
            Language::ZhHans => self.zh_hans.as_ref(),
            Language::Pt => self.pt.as_ref(),
            Language::Es => self.es.as_ref(),
            Language::Pl => self.pl.as_ref(),
            Language::Cs => self.cs.as_ref(),
            Language::Uk => self.uk.as_ref(),
        };
        localized.unwrap_or(&self.en)
    }
}
