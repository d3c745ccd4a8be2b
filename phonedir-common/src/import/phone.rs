//! Phone number normalization
//!
//! Spreadsheet readers infer numeric columns, so a phone cell that was
//! typed as `201` comes back as the float `201.0` and stringifies with
//! a trailing `.0`. Normalization reverses exactly that coercion and
//! nothing else: no digit grouping, no country-code insertion, leading
//! `+` and internal separators pass through verbatim.

/// Produce the canonical display string for a raw phone cell.
///
/// - missing cell -> empty string
/// - a value ending in exactly `.0` has the suffix stripped
/// - surrounding whitespace is trimmed (whitespace-only -> empty)
pub fn normalize_phone(raw: Option<&str>) -> String {
    let Some(value) = raw else {
        return String::new();
    };
    // Only an exact trailing ".0" is stripped; ".05" etc. stay intact.
    let value = value.strip_suffix(".0").unwrap_or(value);
    value.trim().to_string()
}

/// Normalize and drop empty results, for optional TEXT columns
pub fn normalize_phone_opt(raw: Option<&str>) -> Option<String> {
    let normalized = normalize_phone(raw);
    (!normalized.is_empty()).then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_float_suffix() {
        assert_eq!(normalize_phone(Some("201.0")), "201");
        assert_eq!(normalize_phone(Some("312346.0")), "312346");
    }

    #[test]
    fn leaves_other_decimals_alone() {
        assert_eq!(normalize_phone(Some("201.05")), "201.05");
        assert_eq!(normalize_phone(Some(".05")), ".05");
        assert_eq!(normalize_phone(Some("201.00")), "201.00");
    }

    #[test]
    fn missing_and_blank_normalize_to_empty() {
        assert_eq!(normalize_phone(None), "");
        assert_eq!(normalize_phone(Some("")), "");
        assert_eq!(normalize_phone(Some("   ")), "");
    }

    #[test]
    fn passes_through_display_forms() {
        assert_eq!(normalize_phone(Some("+996555111222")), "+996555111222");
        assert_eq!(normalize_phone(Some("312-345")), "312-345");
        assert_eq!(normalize_phone(Some("  200 ")), "200");
    }

    #[test]
    fn optional_variant_drops_empties() {
        assert_eq!(normalize_phone_opt(Some("201.0")), Some("201".to_string()));
        assert_eq!(normalize_phone_opt(Some("  ")), None);
        assert_eq!(normalize_phone_opt(None), None);
    }
}
