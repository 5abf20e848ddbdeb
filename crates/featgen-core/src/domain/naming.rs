//! Name derivation: one human-entered name, three identifier forms.
//!
//! Every generated file re-derives its names from the same raw string, so
//! these functions must stay total and deterministic. Input is lowercased
//! before splitting; `"Counter"`, `"COUNTER"` and `"counter"` are the same
//! name.
//!
//! | Raw input       | title_case    | snake_case      | lower_camel   |
//! |-----------------|---------------|-----------------|---------------|
//! | `counter`       | `Counter`     | `counter`       | `counter`     |
//! | `user profile`  | `UserProfile` | `user_profile`  | `userProfile` |
//! | `Order-Item`    | `OrderItem`   | `order_item`    | `orderItem`   |

use std::fmt;

/// The case-transformed forms of one raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedNames {
    title_case: String,
    snake_case: String,
    lower_camel: String,
}

impl DerivedNames {
    /// Derive all forms from a raw name.
    pub fn derive(raw: &str) -> Self {
        let words = split_words(&raw.to_lowercase());
        let title_case = to_title_case(&words);
        let lower_camel = lower_first(&title_case);

        Self {
            snake_case: words.join("_"),
            title_case,
            lower_camel,
        }
    }

    /// Identifier-safe type name, e.g. `UserProfile`.
    pub fn title_case(&self) -> &str {
        &self.title_case
    }

    /// File-name-safe form, e.g. `user_profile`.
    pub fn snake_case(&self) -> &str {
        &self.snake_case
    }

    /// Variable-name-safe form, e.g. `userProfile`.
    pub fn lower_camel(&self) -> &str {
        &self.lower_camel
    }

    /// `true` when the raw name contained no alphanumeric characters.
    pub fn is_empty(&self) -> bool {
        self.snake_case.is_empty()
    }
}

impl fmt::Display for DerivedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title_case)
    }
}

/// Split an already-lowercased string into words.
///
/// Any run of non-alphanumeric characters is a boundary; boundaries at
/// either end are dropped.
fn split_words(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(w.len());
                    // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
