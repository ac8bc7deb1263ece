//! Transform application for the [`Transform`] catalog.

use crate::op::Transform;

impl Transform {
    /// Apply this transform to a value, returning the new value.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Transform::Trim => value.trim().to_string(),
            Transform::LTrim => value.trim_start().to_string(),
            Transform::RTrim => value.trim_end().to_string(),
            Transform::UpperCase => value.to_uppercase(),
            Transform::LowerCase => value.to_lowercase(),
            Transform::Capitalize => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Transform::Slug => slugify(value),
            Transform::StripSpace => value.chars().filter(|c| !c.is_whitespace()).collect(),
            Transform::WholeNumber => value.chars().filter(char::is_ascii_digit).collect(),
        }
    }
}

/// Lowercase, keep alphanumerics, collapse everything else into single
/// dashes, and strip dashes from both ends.
fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for c in value.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
