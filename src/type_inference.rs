use std::fmt;

/// column types, ordered from strictest to most permissive.
/// the derived `Ord` is the join used by column inference: the larger type wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlType {
    Integer,
    Numeric,
    Text,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Numeric => "NUMERIC",
            SqlType::Text => "TEXT",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

// classifies a single cell value.
// the value is trimmed first. it is text when it is empty, starts with `+`, has a leading zero
// ("01", "-007"), or contains anything outside [0-9.-]. values that get past those checks are
// parsed: an integer literal inside i32 is integer, any other parseable number is numeric,
// and whatever fails to parse ("1-2", "1.2.3", "-") is text.
pub fn classify_value(value: &str) -> SqlType {
    let trimmed = value.trim();

    if trimmed.is_empty() || trimmed.starts_with('+') || has_leading_zero(trimmed) {
        return SqlType::Text;
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        return SqlType::Text;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return if i32::try_from(n).is_ok() {
            SqlType::Integer
        } else {
            SqlType::Numeric
        };
    }

    // digit strings too long for i64 still land here and parse as f64
    match trimmed.parse::<f64>() {
        Ok(_) => SqlType::Numeric,
        Err(_) => SqlType::Text,
    }
}

/// zero-padded codes and phone numbers: a `0` directly followed by another digit.
/// a lone `0` and `0.5` are ordinary numbers.
fn has_leading_zero(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value).as_bytes();
    digits.len() > 1 && digits[0] == b'0' && digits[1].is_ascii_digit()
}

/// infers the type of a whole column as the most permissive type among its values.
/// scanning stops at the first text value since nothing can widen it further.
/// an empty slice yields `Integer`, the strictest type.
pub fn infer_sql_type(column_data: &[&str]) -> SqlType {
    let mut inferred = SqlType::Integer;

    for value in column_data {
        inferred = inferred.max(classify_value(value));
        if inferred == SqlType::Text {
            break;
        }
    }

    inferred
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integer() {
        assert_eq!(infer_sql_type(&["1", "2", "3"]), SqlType::Integer);
        assert_eq!(infer_sql_type(&["-10", "0", "999"]), SqlType::Integer);
        assert_eq!(infer_sql_type(&["2147483647", "-2147483648"]), SqlType::Integer);
    }

    #[test]
    fn test_infer_numeric() {
        assert_eq!(infer_sql_type(&["1", "2.5"]), SqlType::Numeric);
        assert_eq!(infer_sql_type(&["-0.5", "3.14"]), SqlType::Numeric);
        assert_eq!(infer_sql_type(&[".5", "1."]), SqlType::Numeric);
    }

    #[test]
    fn test_integer_outside_i32_is_numeric() {
        assert_eq!(classify_value("2147483648"), SqlType::Numeric);
        assert_eq!(classify_value("-2147483649"), SqlType::Numeric);
        assert_eq!(classify_value("3000000000"), SqlType::Numeric);
        // wider than i64
        assert_eq!(classify_value("123456789012345678901234567890"), SqlType::Numeric);
    }

    #[test]
    fn test_leading_zero_and_plus_are_text() {
        assert_eq!(infer_sql_type(&["01"]), SqlType::Text);
        assert_eq!(infer_sql_type(&["+1"]), SqlType::Text);
        assert_eq!(classify_value("007"), SqlType::Text);
        assert_eq!(classify_value("-05"), SqlType::Text);
        assert_eq!(classify_value("00"), SqlType::Text);
        assert_eq!(classify_value("+1.5"), SqlType::Text);
    }

    #[test]
    fn test_zero_is_still_a_number() {
        assert_eq!(classify_value("0"), SqlType::Integer);
        assert_eq!(classify_value("-0"), SqlType::Integer);
        assert_eq!(classify_value("0.5"), SqlType::Numeric);
        assert_eq!(classify_value("-0.25"), SqlType::Numeric);
    }

    #[test]
    fn test_empty_and_whitespace_are_text() {
        assert_eq!(classify_value(""), SqlType::Text);
        assert_eq!(classify_value("   "), SqlType::Text);
        assert_eq!(infer_sql_type(&["1", "", "3"]), SqlType::Text);
    }

    #[test]
    fn test_value_is_trimmed_before_classifying() {
        assert_eq!(classify_value(" 42 "), SqlType::Integer);
        assert_eq!(classify_value("\t2.5"), SqlType::Numeric);
    }

    #[test]
    fn test_foreign_characters_are_text() {
        // exponents, separators and currency are not in [0-9.-]
        assert_eq!(classify_value("1e5"), SqlType::Text);
        assert_eq!(classify_value("1,000"), SqlType::Text);
        assert_eq!(classify_value("$5"), SqlType::Text);
        assert_eq!(classify_value("abc"), SqlType::Text);
        assert_eq!(classify_value("NaN"), SqlType::Text);
        assert_eq!(classify_value("inf"), SqlType::Text);
    }

    #[test]
    fn test_unparseable_number_shapes_are_text() {
        assert_eq!(classify_value("1-2"), SqlType::Text);
        assert_eq!(classify_value("1.2.3"), SqlType::Text);
        assert_eq!(classify_value("-"), SqlType::Text);
        assert_eq!(classify_value("."), SqlType::Text);
        assert_eq!(classify_value("--1"), SqlType::Text);
    }

    #[test]
    fn test_most_permissive_type_wins_regardless_of_order() {
        assert_eq!(infer_sql_type(&["2.5", "1"]), SqlType::Numeric);
        assert_eq!(infer_sql_type(&["abc", "1", "2.5"]), SqlType::Text);
        assert_eq!(infer_sql_type(&["1", "2.5", "abc"]), SqlType::Text);
    }

    #[test]
    fn test_infer_empty_column_data() {
        assert_eq!(infer_sql_type(&[]), SqlType::Integer);
    }

    #[test]
    fn test_type_ordering_and_display() {
        assert!(SqlType::Integer < SqlType::Numeric);
        assert!(SqlType::Numeric < SqlType::Text);
        assert_eq!(SqlType::Integer.to_string(), "INTEGER");
        assert_eq!(SqlType::Numeric.to_string(), "NUMERIC");
        assert_eq!(SqlType::Text.to_string(), "TEXT");
    }
}
