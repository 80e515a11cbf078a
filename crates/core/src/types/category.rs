//! Product categories.

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Paintings,
    #[default]
    Handicrafts,
    Statues,
    Minerals,
    Fruits,
    Clothing,
    Instruments,
    Cultural,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Paintings,
        Self::Handicrafts,
        Self::Statues,
        Self::Minerals,
        Self::Fruits,
        Self::Clothing,
        Self::Instruments,
        Self::Cultural,
    ];

    /// URL/form value. Also the translation key of the category label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paintings => "paintings",
            Self::Handicrafts => "handicrafts",
            Self::Statues => "statues",
            Self::Minerals => "minerals",
            Self::Fruits => "fruits",
            Self::Clothing => "clothing",
            Self::Instruments => "instruments",
            Self::Cultural => "cultural",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("all".parse::<Category>().is_err());
    }
}
