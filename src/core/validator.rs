use phonenumber::{country, Mode, PhoneNumber};

use crate::domain::model::{Classification, ValidationResult};

/// Shortest national significant number any plan assigns.
const MIN_NSN_LENGTH: usize = 2;
/// Longest national significant number any plan assigns.
const MAX_NSN_LENGTH: usize = 17;
/// E.164 caps the full international number (calling code included).
const MAX_E164_LENGTH: usize = 15;

/// How a request's `country_code` is applied to numbers written without an
/// international prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionHint {
    Region(country::Id),
    CallingCode(u16),
    Unknown,
}

impl RegionHint {
    pub fn parse(hint: &str) -> Self {
        let hint = hint.trim();
        let digits = hint.strip_prefix('+').unwrap_or(hint);

        if !digits.is_empty() && digits.len() <= 3 && digits.chars().all(|c| c.is_ascii_digit()) {
            return match digits.parse::<u16>() {
                Ok(code) if code > 0 => RegionHint::CallingCode(code),
                _ => RegionHint::Unknown,
            };
        }

        match hint.to_ascii_uppercase().parse::<country::Id>() {
            Ok(id) => RegionHint::Region(id),
            Err(_) => RegionHint::Unknown,
        }
    }
}

/// Stateless numbering-plan classifier backed by libphonenumber metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberingPlanValidator;

impl NumberingPlanValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, raw: &str, hint: RegionHint) -> Classification {
        let number = match parse_candidate(raw, hint) {
            Some(number) => number,
            None => return Classification::Invalid,
        };

        if is_possible(&number) && phonenumber::is_valid(&number) {
            Classification::Valid
        } else {
            Classification::Invalid
        }
    }

    /// Splits `numbers` into valid and invalid, evaluating each independently.
    pub fn validate_batch(&self, numbers: &[String], region_hint: &str) -> ValidationResult {
        let hint = RegionHint::parse(region_hint);
        tracing::debug!(
            "validating {} numbers for code '{}' ({:?})",
            numbers.len(),
            region_hint,
            hint
        );

        let mut result = ValidationResult::default();
        for raw in numbers {
            match self.classify(raw, hint) {
                Classification::Valid => result.valid.push(raw.clone()),
                Classification::Invalid => result.invalid.push(raw.clone()),
            }
        }

        tracing::debug!(
            "validated batch: {} valid, {} invalid",
            result.valid.len(),
            result.invalid.len()
        );
        result
    }
}

fn parse_candidate(raw: &str, hint: RegionHint) -> Option<PhoneNumber> {
    let trimmed = raw.trim();
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    // 號碼自帶國碼時完全忽略 hint
    let parsed = if has_international_prefix(trimmed) {
        phonenumber::parse(None, trimmed.replacen('＋', "+", 1))
    } else {
        match hint {
            RegionHint::CallingCode(code) => {
                phonenumber::parse(None, format!("+{} {}", code, trimmed))
            }
            RegionHint::Region(id) => phonenumber::parse(Some(id), trimmed),
            RegionHint::Unknown => phonenumber::parse(None, trimmed),
        }
    };

    match parsed {
        Ok(number) => Some(number),
        Err(e) => {
            tracing::debug!("unable to parse '{}': {:?}", raw, e);
            None
        }
    }
}

/// Whether the number carries its own international prefix. A `tel:` scheme
/// and leading whitespace or punctuation such as `(` are skipped; both `+`
/// and the full-width `＋` count as the prefix.
fn has_international_prefix(raw: &str) -> bool {
    let body = match raw.get(..4) {
        Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => &raw[4..],
        _ => raw,
    };
    let start = body.trim_start_matches(|c: char| {
        c != '+' && (c.is_whitespace() || c.is_ascii_punctuation())
    });
    start.starts_with('+') || start.starts_with('＋')
}

/// Coarse length check that ignores which numbers are actually assigned.
fn is_possible(number: &PhoneNumber) -> bool {
    let e164 = number.format().mode(Mode::E164).to_string();
    let total_digits = e164.chars().filter(|c| c.is_ascii_digit()).count();
    let code_digits = number.code().value().to_string().len();
    let nsn_digits = total_digits.saturating_sub(code_digits);

    (MIN_NSN_LENGTH..=MAX_NSN_LENGTH).contains(&nsn_digits) && total_digits <= MAX_E164_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(numbers: &[&str]) -> Vec<String> {
        numbers.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_region_hint_parsing() {
        assert_eq!(RegionHint::parse("US"), RegionHint::Region(country::Id::US));
        assert_eq!(RegionHint::parse(" gb "), RegionHint::Region(country::Id::GB));
        assert_eq!(RegionHint::parse("1"), RegionHint::CallingCode(1));
        assert_eq!(RegionHint::parse("+44"), RegionHint::CallingCode(44));
        assert_eq!(RegionHint::parse(""), RegionHint::Unknown);
        assert_eq!(RegionHint::parse("0"), RegionHint::Unknown);
        assert_eq!(RegionHint::parse("NOT-A-REGION"), RegionHint::Unknown);
    }

    #[test]
    fn test_mixed_batch_for_us() {
        let validator = NumberingPlanValidator::new();
        let result = validator.validate_batch(&batch(&["5125551234", "notanumber"]), "US");

        assert_eq!(result.valid, vec!["5125551234".to_string()]);
        assert_eq!(result.invalid, vec!["notanumber".to_string()]);
    }

    #[test]
    fn test_partition_covers_every_input() {
        let validator = NumberingPlanValidator::new();
        let numbers = batch(&[
            "(650) 253-0000",
            "123",
            "",
            "+442070313000",
            "+1 650 253 0000 ext. 12",
            "555",
            "abc-def",
            "650-253-0000",
        ]);

        let result = validator.validate_batch(&numbers, "US");

        assert_eq!(result.len(), numbers.len());
        for number in &numbers {
            let in_valid = result.valid.iter().filter(|n| *n == number).count();
            let in_invalid = result.invalid.iter().filter(|n| *n == number).count();
            let expected = numbers.iter().filter(|n| *n == number).count();
            assert_eq!(in_valid + in_invalid, expected, "{number} misplaced");
            assert!(in_valid == 0 || in_invalid == 0, "{number} in both lists");
        }
    }

    #[test]
    fn test_order_is_preserved_within_each_list() {
        let validator = NumberingPlanValidator::new();
        let numbers = batch(&["6502530000", "x", "+442070313000", "y"]);

        let result = validator.validate_batch(&numbers, "US");

        assert_eq!(result.valid, batch(&["6502530000", "+442070313000"]));
        assert_eq!(result.invalid, batch(&["x", "y"]));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let validator = NumberingPlanValidator::new();
        let hint = RegionHint::parse("US");
        for raw in ["5125551234", "notanumber", "+442070313000", "12"] {
            assert_eq!(validator.classify(raw, hint), validator.classify(raw, hint));
        }
    }

    const HINTS: [&str; 10] = ["US", "GB", "IT", "DE", "FR", "1", "+44", "39", "", "??"];

    #[test]
    fn test_country_prefix_dominates_hint() {
        let validator = NumberingPlanValidator::new();

        for raw in [
            "+442070313000",
            "+39 06 6982 1234",
            "tel:+1-650-253-0000",
            "(+44) 20 7031 3000",
            "＋44 20 7031 3000",
        ] {
            for hint in HINTS {
                assert_eq!(
                    validator.classify(raw, RegionHint::parse(hint)),
                    Classification::Valid,
                    "{raw} with hint {hint}"
                );
            }
        }
    }

    #[test]
    fn test_prefixed_number_classification_ignores_hint() {
        let validator = NumberingPlanValidator::new();

        for raw in ["+44 (0) 20 7031 3000", "+1 650 253 0000 1234567", "+999 123", "+33 1 42 68 53 00"] {
            let expected = validator.classify(raw, RegionHint::Unknown);
            for hint in HINTS {
                assert_eq!(
                    validator.classify(raw, RegionHint::parse(hint)),
                    expected,
                    "{raw} with hint {hint}"
                );
            }
        }
    }

    #[test]
    fn test_international_prefix_detection() {
        assert!(has_international_prefix("+442070313000"));
        assert!(has_international_prefix("tel:+1-650-253-0000"));
        assert!(has_international_prefix("TEL:+1 650"));
        assert!(has_international_prefix("(+44) 20 7031 3000"));
        assert!(has_international_prefix("＋44 20"));
        assert!(!has_international_prefix("6502530000"));
        assert!(!has_international_prefix("(650) 253-0000"));
        assert!(!has_international_prefix("650+1"));
        assert!(!has_international_prefix("tel:6502530000"));
    }

    #[test]
    fn test_calling_code_hint() {
        let validator = NumberingPlanValidator::new();
        assert_eq!(
            validator.classify("6502530000", RegionHint::parse("1")),
            Classification::Valid
        );
        assert_eq!(
            validator.classify("6502530000", RegionHint::parse("+1")),
            Classification::Valid
        );
    }

    #[test]
    fn test_national_number_without_usable_hint_is_invalid() {
        let validator = NumberingPlanValidator::new();
        assert_eq!(
            validator.classify("6502530000", RegionHint::Unknown),
            Classification::Invalid
        );
    }

    #[test]
    fn test_unassigned_and_short_numbers_are_invalid() {
        let validator = NumberingPlanValidator::new();
        let hint = RegionHint::parse("US");

        // 區碼不能以 0 開頭
        assert_eq!(validator.classify("0125551234", hint), Classification::Invalid);
        assert_eq!(validator.classify("12", hint), Classification::Invalid);
        assert_eq!(validator.classify("+1 650 253 0000 1234567", hint), Classification::Invalid);
    }

    #[test]
    fn test_empty_batch() {
        let validator = NumberingPlanValidator::new();
        let result = validator.validate_batch(&[], "US");
        assert!(result.is_empty());
    }
}
