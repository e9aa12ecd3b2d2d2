use crate::models::address::ValidName;
use crate::services::error::ValidationError;

fn is_permitted(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

/// Checks a raw name against the alias format rules.
///
/// On success the trimmed input is returned unchanged; lowercasing and
/// whitespace stripping are the generator's job, not the validator's.
pub fn validate(raw: &str) -> Result<ValidName, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if trimmed.chars().count() < 2 {
        return Err(ValidationError::TooShort);
    }

    // Internal whitespace is fine in the raw name ("John Doe"); only the
    // remaining characters have to fit the permitted set.
    if !trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(is_permitted)
    {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(ValidName::new(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(validate("").unwrap_err(), ValidationError::EmptyInput);
        assert_eq!(validate("   ").unwrap_err(), ValidationError::EmptyInput);
        assert_eq!(validate("\t\n").unwrap_err(), ValidationError::EmptyInput);
    }

    #[test]
    fn single_character_is_too_short() {
        assert_eq!(validate("a").unwrap_err(), ValidationError::TooShort);
        assert_eq!(validate("  a  ").unwrap_err(), ValidationError::TooShort);
    }

    #[test]
    fn characters_outside_the_permitted_set_are_rejected() {
        assert_eq!(
            validate("john@doe").unwrap_err(),
            ValidationError::InvalidCharacters
        );
        assert_eq!(
            validate("john!").unwrap_err(),
            ValidationError::InvalidCharacters
        );
        assert_eq!(
            validate("jöhn").unwrap_err(),
            ValidationError::InvalidCharacters
        );
    }

    #[test]
    fn valid_names_are_returned_trimmed_but_otherwise_unchanged() {
        assert_eq!(validate("  John Doe  ").unwrap().as_ref(), "John Doe");
        assert_eq!(validate("Jane_Doe-01").unwrap().as_ref(), "Jane_Doe-01");
        assert_eq!(validate("a.b").unwrap().as_ref(), "a.b");
    }

    #[test]
    fn internal_whitespace_does_not_count_against_the_character_set() {
        // "j o" strips down to "jo", which is permitted.
        assert_eq!(validate("j o").unwrap().as_ref(), "j o");
    }
}
