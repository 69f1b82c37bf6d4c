//! Translation status classification.
//!
//! A status relates three independent facts about one `(language, namespace, key)`:
//! whether the language has a value, whether the key is used in code, and whether
//! the reference language has a value.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    /// Translated and used in code.
    Normal,
    /// No value in this language although one is expected.
    Missing,
    /// Used in code but nothing to compare against yet.
    NewInCode,
    /// Has a value but code no longer uses the key.
    NotUsed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Normal,
        Status::Missing,
        Status::NewInCode,
        Status::NotUsed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Missing => "missing",
            Status::NewInCode => "newInCode",
            Status::NotUsed => "notUsed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the language being classified is the reference language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Reference,
    Translation,
}

impl LanguageRole {
    pub fn of(language: &str, reference_language: &str) -> Self {
        if language == reference_language {
            LanguageRole::Reference
        } else {
            LanguageRole::Translation
        }
    }
}

/// Inputs for one classification. An empty `value` means "no value".
#[derive(Debug, Clone, Copy)]
pub struct StatusInput<'a> {
    pub value: &'a str,
    pub is_extracted: bool,
    /// Reference-language value; `Some("")` still counts as present.
    pub reference_value: Option<&'a str>,
}

/// Classify a key for one language.
///
/// For non-reference languages an empty value is `Missing` whenever the
/// reference language has the key, even if the key is also new in code.
pub fn classify(role: LanguageRole, input: StatusInput<'_>) -> Status {
    let has_value = !input.value.is_empty();

    match role {
        LanguageRole::Reference => {
            if has_value && !input.is_extracted {
                Status::NotUsed
            } else if input.is_extracted && !has_value {
                Status::NewInCode
            } else {
                Status::Normal
            }
        }
        LanguageRole::Translation => {
            if !has_value {
                if input.reference_value.is_some() {
                    Status::Missing
                } else if input.is_extracted {
                    Status::NewInCode
                } else {
                    Status::Missing
                }
            } else if !input.is_extracted {
                Status::NotUsed
            } else {
                Status::Normal
            }
        }
    }
}
