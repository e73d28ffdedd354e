pub use yew::classes;
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

use econquest_core::Rarity;

/// Palette slots for achievement tiers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Gray,
    Blue,
    Purple,
    Yellow,
}

impl Tone {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Gray => "gray-500",
            Self::Blue => "blue-500",
            Self::Purple => "purple-500",
            Self::Yellow => "yellow-500",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }

    /// Badge tone for an achievement tier.
    #[must_use]
    pub const fn for_rarity(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Common => Self::Gray,
            Rarity::Rare => Self::Blue,
            Rarity::Epic => Self::Purple,
            Rarity::Legendary => Self::Yellow,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Size {
    Md,
    Lg,
}

impl Size {
    /// Tailwind square for avatars and icons.
    #[must_use]
    pub const fn square(self) -> &'static str {
        match self {
            Self::Md => "h-12 w-12",
            Self::Lg => "h-14 w-14",
        }
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}
