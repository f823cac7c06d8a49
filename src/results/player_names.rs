//! Player display name decomposition.
//!
//! A display name is either `<tag>` or `<crew> | <tag>`. Both parts are
//! non-empty and may themselves contain the separator; the split happens at the
//! last `" | "` that leaves a non-empty crew and a non-empty tag.

use crate::constants::CREW_SEPARATOR;
use crate::error::AppError;

/// Crew and tag parsed from a display name. Both are absent for an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    pub crew: Option<String>,
    pub tag: Option<String>,
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Finds the rightmost separator with a non-empty crew before it and a
/// non-empty tag after it. Overlapping separators (`"A | | B"`) are considered.
fn split_at_last_separator(name: &str) -> Option<(&str, &str)> {
    (1..name.len())
        .rev()
        .filter(|&i| name.is_char_boundary(i))
        .find_map(|i| {
            let tag = name[i..].strip_prefix(CREW_SEPARATOR)?;
            (!tag.is_empty()).then(|| (&name[..i], tag))
        })
}

/// Splits a player's display name into an optional crew and a tag.
///
/// # Errors
/// * `AppError::NameParse` - The name contains a line terminator and so cannot
///   be read as a single crew/tag pair
///
/// # Example
/// ```
/// use smashgg_results::results::player_names::parse_player_name;
///
/// let parsed = parse_player_name("TeamA | Alice").unwrap();
/// assert_eq!(parsed.crew.as_deref(), Some("TeamA"));
/// assert_eq!(parsed.tag.as_deref(), Some("Alice"));
///
/// let parsed = parse_player_name("Alice").unwrap();
/// assert_eq!(parsed.crew, None);
/// assert_eq!(parsed.tag.as_deref(), Some("Alice"));
/// ```
pub fn parse_player_name(name: &str) -> Result<ParsedName, AppError> {
    if name.is_empty() {
        return Ok(ParsedName::default());
    }
    if name.contains(is_line_terminator) {
        return Err(AppError::name_parse(name));
    }

    Ok(match split_at_last_separator(name) {
        Some((crew, tag)) => ParsedName {
            crew: Some(crew.to_string()),
            tag: Some(tag.to_string()),
        },
        None => ParsedName {
            crew: None,
            tag: Some(name.to_string()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(crew: Option<&str>, tag: &str) -> ParsedName {
        ParsedName {
            crew: crew.map(str::to_string),
            tag: Some(tag.to_string()),
        }
    }

    #[test]
    fn test_bare_tag() {
        for name in ["Alice", "Mang0", "Dr. Peepee", "a|b", "x |y", "名前"] {
            assert_eq!(parse_player_name(name).unwrap(), parsed(None, name));
        }
    }

    #[test]
    fn test_crew_and_tag() {
        assert_eq!(
            parse_player_name("TeamA | Alice").unwrap(),
            parsed(Some("TeamA"), "Alice")
        );
        assert_eq!(
            parse_player_name("Liquid | Hungrybox").unwrap(),
            parsed(Some("Liquid"), "Hungrybox")
        );
    }

    #[test]
    fn test_splits_at_last_separator() {
        assert_eq!(
            parse_player_name("A | B | C").unwrap(),
            parsed(Some("A | B"), "C")
        );
    }

    #[test]
    fn test_overlapping_separators() {
        assert_eq!(parse_player_name("A | | B").unwrap(), parsed(Some("A |"), "B"));
        // The last separator would leave an empty tag, so the earlier one wins.
        assert_eq!(parse_player_name("A | | ").unwrap(), parsed(Some("A"), "| "));
    }

    #[test]
    fn test_separator_without_crew_or_tag() {
        assert_eq!(parse_player_name(" | B").unwrap(), parsed(None, " | B"));
        assert_eq!(parse_player_name("A | ").unwrap(), parsed(None, "A | "));
        assert_eq!(parse_player_name(" | ").unwrap(), parsed(None, " | "));
    }

    #[test]
    fn test_multibyte_names() {
        assert_eq!(
            parse_player_name("チーム | 選手").unwrap(),
            parsed(Some("チーム"), "選手")
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(parse_player_name("").unwrap(), ParsedName::default());
    }

    #[test]
    fn test_line_terminators_rejected() {
        for name in ["Team\nAlice", "Alice\r", "A\u{2028}B", "TeamA | Ali\u{2029}ce"] {
            match parse_player_name(name) {
                Err(AppError::NameParse { name: reported }) => assert_eq!(reported, name),
                other => panic!("expected NameParse for {name:?}, got {other:?}"),
            }
        }
    }
}
