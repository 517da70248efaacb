//! Closed catalogues shared with the backend: employee skills (also the
//! bookable services) and product categories.
//!
//! Each variant has exactly one wire code and one display label; the
//! `match` tables below are exhaustive, so adding a variant without a
//! mapping does not compile.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Common behaviour of a code/label catalogue.
pub trait Catalog: Copy + PartialEq + Sized + 'static {
    /// Human name of the catalogue, used in error messages.
    const KIND: &'static str;
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }

    /// Accept either the wire code or the label, ignoring case and treating
    /// spaces and dashes as underscores (`blow dry`, `Blow-Dry`, `BLOW_DRY`).
    fn parse(input: &str) -> AppResult<Self> {
        let wanted = normalize(input);
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize(v.code()) == wanted || normalize(v.label()) == wanted)
            .ok_or_else(|| AppError::InvalidCatalogValue {
                kind: Self::KIND,
                value: input.trim().to_string(),
            })
    }

    /// Parse a comma separated list, dropping blanks and duplicates.
    fn parse_list(input: &str) -> AppResult<Vec<Self>> {
        let mut out: Vec<Self> = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let v = Self::parse(part)?;
            if !out.contains(&v) {
                out.push(v);
            }
        }
        Ok(out)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace([' ', '-'], "_")
}

/// Join the wire codes of a slice of catalogue values.
pub fn codes<C: Catalog>(values: &[C]) -> Vec<String> {
    values.iter().map(|v| v.code().to_string()).collect()
}

/// A catalogue value read from a server payload. Codes this client does
/// not know are kept verbatim instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming<C> {
    Known(C),
    Unrecognized(String),
}

impl<C: Catalog> Incoming<C> {
    pub fn known(&self) -> Option<C> {
        match self {
            Incoming::Known(c) => Some(*c),
            Incoming::Unrecognized(_) => None,
        }
    }

    /// The label, or the raw code when it is not in the catalogue.
    pub fn label(&self) -> &str {
        match self {
            Incoming::Known(c) => c.label(),
            Incoming::Unrecognized(raw) => raw,
        }
    }
}

impl<C: Catalog> From<C> for Incoming<C> {
    fn from(value: C) -> Self {
        Incoming::Known(value)
    }
}

impl<'de, C: Catalog> Deserialize<'de> for Incoming<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(match C::from_code(code.trim()) {
            Some(c) => Incoming::Known(c),
            None => Incoming::Unrecognized(code),
        })
    }
}

/// Join the labels of received values, raw codes included.
pub fn incoming_labels<C: Catalog>(values: &[Incoming<C>]) -> String {
    values
        .iter()
        .map(Incoming::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The recognised values only, for editing and resending.
pub fn known<C: Catalog>(values: &[Incoming<C>]) -> Vec<C> {
    values.iter().filter_map(Incoming::known).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Skill {
    Haircut,
    Coloring,
    Beard,
    Shampoo,
    BlowDry,
    Perm,
    Highlights,
    HairTreatment,
    Extensions,
    HairsStraightening,
}

impl Catalog for Skill {
    const KIND: &'static str = "service";
    const ALL: &'static [Self] = &[
        Skill::Haircut,
        Skill::Coloring,
        Skill::Beard,
        Skill::Shampoo,
        Skill::BlowDry,
        Skill::Perm,
        Skill::Highlights,
        Skill::HairTreatment,
        Skill::Extensions,
        Skill::HairsStraightening,
    ];

    fn code(&self) -> &'static str {
        match self {
            Skill::Haircut => "HAIRCUT",
            Skill::Coloring => "COLORING",
            Skill::Beard => "BEARD",
            Skill::Shampoo => "SHAMPOO",
            Skill::BlowDry => "BLOW_DRY",
            Skill::Perm => "PERM",
            Skill::Highlights => "HIGHLIGHTS",
            Skill::HairTreatment => "HAIR_TREATMENT",
            Skill::Extensions => "EXTENSIONS",
            Skill::HairsStraightening => "HAIRS_STRAIGHTENING",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Skill::Haircut => "Haircut",
            Skill::Coloring => "Coloring",
            Skill::Beard => "Beard",
            Skill::Shampoo => "Shampoo",
            Skill::BlowDry => "Blow Dry",
            Skill::Perm => "Perm",
            Skill::Highlights => "Highlights",
            Skill::HairTreatment => "Hair Treatment",
            Skill::Extensions => "Extensions",
            Skill::HairsStraightening => "Hair Straightening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    HairCare,
    Styling,
    Treatment,
    Color,
    Tools,
    MenCare,
    Accessories,
    Kits,
    ChildrenCare,
    SkinCare,
    Other,
}

impl Catalog for Category {
    const KIND: &'static str = "category";
    const ALL: &'static [Self] = &[
        Category::HairCare,
        Category::Styling,
        Category::Treatment,
        Category::Color,
        Category::Tools,
        Category::MenCare,
        Category::Accessories,
        Category::Kits,
        Category::ChildrenCare,
        Category::SkinCare,
        Category::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Category::HairCare => "HAIR_CARE",
            Category::Styling => "STYLING",
            Category::Treatment => "TREATMENT",
            Category::Color => "COLOR",
            Category::Tools => "TOOLS",
            Category::MenCare => "MEN_CARE",
            Category::Accessories => "ACCESSORIES",
            Category::Kits => "KITS",
            Category::ChildrenCare => "CHILDREN_CARE",
            Category::SkinCare => "SKIN_CARE",
            Category::Other => "OTHER",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Category::HairCare => "Hair care",
            Category::Styling => "Styling",
            Category::Treatment => "Treatment",
            Category::Color => "Color",
            Category::Tools => "Tools",
            Category::MenCare => "Men care",
            Category::Accessories => "Accessories",
            Category::Kits => "Kits",
            Category::ChildrenCare => "Children care",
            Category::SkinCare => "Skin care",
            Category::Other => "Other",
        }
    }
}
