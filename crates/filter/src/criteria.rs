//! Filter criteria (transient UI state).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use prodcat_core::ValueObject;

/// Raw sentinel meaning "no constraint" for a filter dimension.
pub const ALL: &str = "all";

/// Selection for an exact-match filter dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interpret a raw control value; the sentinel `"all"` means no constraint.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            Selection::All
        } else {
            Selection::Only(raw.to_string())
        }
    }

    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The selected value, or `None` for [`Selection::All`].
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    /// Whether a control labelled `candidate` is the active one.
    pub fn is_selected(&self, candidate: &str) -> bool {
        self.value() == Some(candidate)
    }

    pub fn as_raw(&self) -> &str {
        self.value().unwrap_or(ALL)
    }
}

impl core::fmt::Display for Selection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_raw())
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_raw())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selection::parse(&raw))
    }
}

/// Whitespace stripped from either end of search text and product names.
///
/// Unicode `White_Space` plus the byte order mark U+FEFF, minus NEL (U+0085).
pub fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Current user-chosen filter values.
///
/// The default value applies no filtering at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub selected_user_name: Selection,
    pub name_query: String,
    pub selected_category_title: Selection,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    pub fn with_user(self, user: Selection) -> Self {
        Self {
            selected_user_name: user,
            ..self
        }
    }

    pub fn with_name_query(self, query: impl Into<String>) -> Self {
        Self {
            name_query: query.into(),
            ..self
        }
    }

    pub fn with_category(self, category: Selection) -> Self {
        Self {
            selected_category_title: category,
            ..self
        }
    }

    /// Clear only the name query.
    pub fn clear_name_filter(self) -> Self {
        self.with_name_query(String::new())
    }

    /// Clear the name query and the user selection.
    ///
    /// The category selection is left as it is.
    pub fn reset_all(self) -> Self {
        Self {
            selected_user_name: Selection::All,
            name_query: String::new(),
            ..self
        }
    }

    /// Query as used for matching: trimmed on both ends and lower-cased.
    pub fn normalized_name_query(&self) -> String {
        self.name_query.trim_matches(is_trimmable).to_lowercase()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.selected_user_name.is_all()
            && self.normalized_name_query().is_empty()
            && self.selected_category_title.is_all()
    }
}
