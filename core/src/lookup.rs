//! Character lookup for `roster show`.
//!
//! A query names a character by its internal name (`Playerace`, the name the
//! game spawns it under) or by its short name. Short names also match
//! case-insensitively and by unique prefix; a miss suggests close spellings.

use crate::scan::LoadedCharacter;

/// Largest edit distance still offered as a suggestion.
const SUGGESTION_DISTANCE: usize = 3;
const MAX_SUGGESTIONS: usize = 3;

/// Why a query did not resolve to exactly one character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    pub message: String,
    pub suggestion: Option<Vec<String>>,
}

/// Find a loaded character by short name or internal name.
///
/// Characters without a short name cannot be addressed and are ignored.
pub fn resolve_character<'a>(
    query: &str,
    characters: &'a [LoadedCharacter],
) -> Result<&'a LoadedCharacter, LookupError> {
    if query.is_empty() {
        return Err(LookupError {
            message: "Empty character name".to_string(),
            suggestion: None,
        });
    }

    let named: Vec<(&str, &LoadedCharacter)> = characters
        .iter()
        .filter_map(|c| c.definition.name_short().map(|short| (short, c)))
        .collect();

    let exact = named.iter().find(|(short, c)| {
        *short == query || c.definition.name_internal() == Some(query)
    });
    if let Some((_, character)) = exact {
        return Ok(*character);
    }

    let query_lower = query.to_lowercase();
    let folded: Vec<&LoadedCharacter> = named
        .iter()
        .filter(|(short, _)| short.to_lowercase() == query_lower)
        .map(|(_, c)| *c)
        .collect();
    if let [character] = folded[..] {
        return Ok(character);
    }

    let prefixed: Vec<(&str, &LoadedCharacter)> = named
        .iter()
        .filter(|(short, _)| short.to_lowercase().starts_with(&query_lower))
        .copied()
        .collect();
    match prefixed[..] {
        [(_, character)] => Ok(character),
        [] => {
            let suggestions = similar_names(query, &named);
            Err(LookupError {
                message: format!("Character '{}' not found", query),
                suggestion: (!suggestions.is_empty()).then_some(suggestions),
            })
        }
        _ => Err(LookupError {
            message: format!(
                "Ambiguous name '{}' matches {} characters",
                query,
                prefixed.len()
            ),
            suggestion: Some(prefixed.iter().map(|(short, _)| short.to_string()).collect()),
        }),
    }
}

/// Short names close to `query`, nearest first.
fn similar_names(query: &str, named: &[(&str, &LoadedCharacter)]) -> Vec<String> {
    let mut close: Vec<(&str, usize)> = named
        .iter()
        .map(|(short, _)| (*short, levenshtein_distance(query, short)))
        .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
        .collect();
    close.sort_by_key(|(_, distance)| *distance);
    close
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(short, _)| short.to_string())
        .collect()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();
    let len2 = chars2.len();

    // Single rolling row instead of the full matrix.
    let mut row: Vec<usize> = (0..=len2).collect();
    for (i, c1) in chars1.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for j in 1..=len2 {
            let cost = usize::from(*c1 != chars2[j - 1]);
            let next = (row[j] + 1).min(row[j - 1] + 1).min(diagonal + cost);
            diagonal = row[j];
            row[j] = next;
        }
    }
    row[len2]
}
