//! Player name rules applied to API-created players.
//!
//! Checks run in order and the first failure wins: blank names, then the
//! character whitelist, then the denylist.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;

/// Substrings that may not appear anywhere in a name, compared case-insensitively.
pub const BANNED_TERMS: [&str; 3] = ["badword1", "badword2", "offensivephrase"];

fn valid_name_regex() -> &'static Regex {
    static VALID_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^[a-zA-Z0-9'-]+$").unwrap()
    });
    &VALID_NAME_REGEX
}

pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !valid_name_regex().is_match(name) {
        return Err(ValidationError::InvalidCharacters);
    }

    let lowered = name.to_ascii_lowercase();
    if let Some(term) = BANNED_TERMS.iter().find(|term| lowered.contains(*term)) {
        return Err(ValidationError::InappropriateContent {
            term: term.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_names() {
        assert_eq!(validate_player_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_player_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_player_name("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_rejects_characters_outside_whitelist() {
        assert_eq!(validate_player_name("John_Doe"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_player_name("John Doe"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_player_name(" Alex"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_player_name("Zoë"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_rejects_banned_terms_in_any_case() {
        assert_eq!(
            validate_player_name("BadWord1Jr"),
            Err(ValidationError::InappropriateContent {
                term: "badword1".to_string()
            })
        );
        assert_eq!(
            validate_player_name("xxOFFENSIVEPHRASExx"),
            Err(ValidationError::InappropriateContent {
                term: "offensivephrase".to_string()
            })
        );
    }

    #[test]
    fn test_character_check_precedes_denylist() {
        assert_eq!(
            validate_player_name("badword2 Smith"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_accepts_valid_names() {
        assert_eq!(validate_player_name("O'Brien-Smith"), Ok(()));
        assert_eq!(validate_player_name("Alex"), Ok(()));
        assert_eq!(validate_player_name("player99"), Ok(()));
    }
}
