//! crates/logging/src/category.rs
//! The closed set of log categories and their display tags.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Semantic tag attached to every log call.
///
/// The set is closed. Each variant maps to exactly one [`DisplayTag`] through
/// [`Category::tag`], and only [`Category::Critical`] bypasses date
/// suppression.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Ordinary output with no particular emphasis.
    #[default]
    Default,
    /// Errors and anything that must never be dropped.
    Critical,
    /// Important but not fatal.
    Important,
    /// Worth noticing while scanning the log.
    Highlighted,
    /// Code paths that have been reviewed.
    Reviewed,
    /// Output with lasting diagnostic value.
    Valuable,
    /// Code paths awaiting review.
    ToBeReviewed,
    /// Noise that is kept only for completeness.
    NotImportant,
}

/// How a category is rendered in a log line.
///
/// `glyph` is used in plain output. `color` holds the ANSI SGR parameters
/// (without the leading `ESC[` or trailing `m`) used in color output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayTag {
    /// Symbol placed before the call-site bracket in plain output.
    pub glyph: &'static str,
    /// SGR parameters wrapped around the whole line in color output.
    pub color: &'static str,
}

struct Entry {
    category: Category,
    name: &'static str,
    tag: DisplayTag,
}

static REGISTRY: [Entry; 8] = [
    Entry {
        category: Category::Default,
        name: "default",
        tag: DisplayTag {
            glyph: "⚫",
            color: "38;2;0;34;98",
        },
    },
    Entry {
        category: Category::Critical,
        name: "critical",
        tag: DisplayTag {
            glyph: "🔴",
            color: "48;2;220;100;100",
        },
    },
    Entry {
        category: Category::Important,
        name: "important",
        tag: DisplayTag {
            glyph: "🟠",
            color: "48;2;255;212;120",
        },
    },
    Entry {
        category: Category::Highlighted,
        name: "highlighted",
        tag: DisplayTag {
            glyph: "🟡",
            color: "48;2;255;252;120",
        },
    },
    Entry {
        category: Category::Reviewed,
        name: "reviewed",
        tag: DisplayTag {
            glyph: "🟢",
            color: "48;2;213;251;120",
        },
    },
    Entry {
        category: Category::Valuable,
        name: "valuable",
        tag: DisplayTag {
            glyph: "🔵",
            color: "48;2;118;214;255",
        },
    },
    Entry {
        category: Category::ToBeReviewed,
        name: "to_be_reviewed",
        tag: DisplayTag {
            glyph: "🟣",
            color: "48;2;215;131;255",
        },
    },
    Entry {
        category: Category::NotImportant,
        name: "not_important",
        tag: DisplayTag {
            glyph: "⚪",
            color: "48;2;192;192;192",
        },
    },
];

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::Critical,
        Self::Important,
        Self::Highlighted,
        Self::Reviewed,
        Self::Valuable,
        Self::ToBeReviewed,
        Self::NotImportant,
    ];

    fn entry(self) -> &'static Entry {
        &REGISTRY[self as usize]
    }

    /// Returns the display tag for this category.
    #[must_use]
    pub fn tag(self) -> DisplayTag {
        self.entry().tag
    }

    /// Reports whether records in this category skip date suppression.
    #[must_use]
    pub const fn forces_emission(self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Snake-case name used by configuration tokens and tracing targets.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown log category: {name}")]
pub struct ParseCategoryError {
    name: String,
}

impl ParseCategoryError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        REGISTRY
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
            .map(|entry| entry.category)
            .ok_or_else(|| ParseCategoryError {
                name: wanted.to_owned(),
            })
    }
}
