//! User-facing filter selections and the option enums behind them.

use serde::Serialize;
use thiserror::Error;

use crate::listing::ListOption;

/// Returned when a query string value does not name a known option.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown option: {0}")]
pub struct UnknownVariant(pub String);

/// Current search text, status filter and sort key of a list view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterState<S, K> {
    pub search: String,
    pub status: S,
    pub sort: K,
}

impl<S: ListOption, K: ListOption> Default for FilterState<S, K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: S::default(),
            sort: K::default(),
        }
    }
}

impl<S: ListOption, K: ListOption> FilterState<S, K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn status(mut self, status: S) -> Self {
        self.status = status;
        self
    }

    pub fn sort(mut self, sort: K) -> Self {
        self.sort = sort;
        self
    }

    /// Returns true when search and status are at their defaults.
    ///
    /// The sort key is ignored since it never narrows the result set.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.status == S::default()
    }
}

/// Declares a dropdown option enum with its wire names and labels.
///
/// The first variant is the default.
macro_rules! list_option {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident => ($first_wire:literal, $first_label:literal),
            $($variant:ident => ($wire:literal, $label:literal)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $first,
            $($variant),*
        }

        impl $name {
            /// Name used in query strings and JSON.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $name::$first => $first_wire,
                    $($name::$variant => $wire),*
                }
            }
        }

        impl $crate::listing::ListOption for $name {
            const ALL: &'static [Self] = &[$name::$first, $($name::$variant),*];

            fn value(self) -> &'static str {
                self.as_str()
            }

            fn label(self) -> &'static str {
                match self {
                    $name::$first => $first_label,
                    $($name::$variant => $label),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::listing::filter::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                <Self as $crate::listing::ListOption>::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::listing::filter::UnknownVariant(s.to_string()))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pub(crate) use list_option;

/// Parses an optional query value, falling back to the default for missing or
/// unknown input.
pub fn parse_option<T: ListOption>(value: Option<&str>) -> T {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            log::debug!("Falling back to default list option: {err}");
            T::default()
        }),
        None => T::default(),
    }
}
