//! Locale message templates for validation failures.
//!
//! Templates interpolate `{field}` plus the parameters of the failed
//! check (`{min}`, `{max}`, ...). Unknown locales fall back to English,
//! as does any rule a partial locale table does not cover.

/// Default locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

fn en(code: &str) -> Option<&'static str> {
    Some(match code {
        "required" => "The {field} field is required",
        "contains" => "The {field} field needs to contain one of these values: {allowed}",
        "min_len" => "The {field} field needs to be at least {min} characters",
        "max_len" => "The {field} field needs to be at most {max} characters",
        "exact_len" => "The {field} field needs to be exactly {len} characters",
        "between_len" => "The {field} field needs to be between {min} and {max} characters",
        "alpha" => "The {field} field may only contain letters",
        "alpha_numeric" => "The {field} field may only contain letters and numbers",
        "alpha_dash" => "The {field} field may only contain letters, numbers, dashes and underscores",
        "alpha_space" => "The {field} field may only contain letters and spaces",
        "numeric" => "The {field} field must be a number",
        "integer" => "The {field} field must be a whole number",
        "boolean" => "The {field} field must be a boolean value",
        "valid_email" => "The {field} field must be a valid email address",
        "valid_url" => "The {field} field must be a valid URL",
        "min_numeric" => "The {field} field must be at least {min}",
        "max_numeric" => "The {field} field must be at most {max}",
        "starts" => "The {field} field needs to start with {prefix}",
        "ends" => "The {field} field needs to end with {suffix}",
        "regex" => "The {field} field does not match the required pattern",
        _ => return None,
    })
}

// Partial table; anything missing falls back to English.
fn id(code: &str) -> Option<&'static str> {
    Some(match code {
        "required" => "Kolom {field} wajib diisi",
        "min_len" => "Kolom {field} minimal {min} karakter",
        "max_len" => "Kolom {field} maksimal {max} karakter",
        "valid_email" => "Kolom {field} harus berupa alamat email yang valid",
        "valid_url" => "Kolom {field} harus berupa URL yang valid",
        _ => return None,
    })
}

/// Look up the message template for a rule code in a locale.
pub fn template(locale: &str, code: &str) -> &'static str {
    let localized = match locale {
        "id" => id(code),
        _ => None,
    };
    localized
        .or_else(|| en(code))
        .unwrap_or("The {field} field is invalid")
}

/// Replace `{field}` and each `{param}` placeholder in a template.
pub fn interpolate(template: &str, field: &str, params: &[(&'static str, String)]) -> String {
    let mut message = template.replace("{field}", field);
    for (key, value) in params {
        message = message.replace(&format!("{{{key}}}"), value);
    }
    message
}
