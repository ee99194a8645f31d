//! Key normalization — maps whatever keys the model invented onto the fixed response schema.

use serde_json::{Map, Value};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// The three fields of the response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Score,
    Suggestions,
    RefactoredCode,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Score, Field::Suggestions, Field::RefactoredCode];

    /// The exact key used on the wire. Always wins over synonyms.
    pub fn contract_key(self) -> &'static str {
        match self {
            Field::Score => "score",
            Field::Suggestions => "suggestions",
            Field::RefactoredCode => "refactoredCode",
        }
    }
}

/// How a normalized key is tested against a field.
#[derive(Debug)]
enum KeyRule {
    Exact(&'static [&'static str]),
    Prefix(&'static [&'static str]),
    /// Key contains one of the subjects and one of the qualifiers.
    Compound {
        subjects: &'static [&'static str],
        qualifiers: &'static [&'static str],
    },
}

impl KeyRule {
    fn matches(&self, key: &str) -> bool {
        match self {
            KeyRule::Exact(words) => words.iter().any(|w| *w == key),
            KeyRule::Prefix(stems) => stems.iter().any(|s| key.starts_with(s)),
            KeyRule::Compound {
                subjects,
                qualifiers,
            } => {
                subjects.iter().any(|s| key.contains(s))
                    && qualifiers.iter().any(|q| key.contains(q))
            }
        }
    }
}

/// Synonym table, checked top to bottom. Entries are written in normalized form.
static SYNONYMS: &[(Field, KeyRule)] = &[
    (
        Field::Score,
        KeyRule::Exact(&["score", "grade", "rating", "pontuacao", "nota"]),
    ),
    (
        Field::Suggestions,
        KeyRule::Prefix(&["suggestion", "sugest", "recommendation", "recomendac"]),
    ),
    (Field::RefactoredCode, KeyRule::Exact(&["refactoredcode"])),
    (
        Field::RefactoredCode,
        KeyRule::Compound {
            subjects: &["code", "codigo"],
            qualifiers: &["refactor", "refatora", "improved", "melhorad"],
        },
    ),
];

/// Strips diacritics, lower-cases, and drops spaces, hyphens and underscores.
pub fn normalize_key(key: &str) -> String {
    key.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// Resolves a raw key to the field it names, if any.
pub fn classify_key(key: &str) -> Option<Field> {
    let normalized = normalize_key(key);
    SYNONYMS
        .iter()
        .find(|(_, rule)| rule.matches(&normalized))
        .map(|(field, _)| *field)
}

/// The values the model supplied for each contract field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CanonicalFields {
    pub score: Option<Value>,
    pub suggestions: Option<Value>,
    pub refactored_code: Option<Value>,
}

impl CanonicalFields {
    fn slot(&mut self, field: Field) -> &mut Option<Value> {
        match field {
            Field::Score => &mut self.score,
            Field::Suggestions => &mut self.suggestions,
            Field::RefactoredCode => &mut self.refactored_code,
        }
    }
}

/// Maps a decoded object onto the contract fields.
///
/// Precedence: an exact contract key always wins. Otherwise the first synonym in the
/// object's key order wins. Unmatched keys are dropped.
pub fn canonicalize(object: &Map<String, Value>) -> CanonicalFields {
    let mut fields = CanonicalFields::default();

    for field in Field::ALL {
        if let Some(value) = object.get(field.contract_key()) {
            *fields.slot(field) = Some(value.clone());
        }
    }

    for (key, value) in object {
        let Some(field) = classify_key(key) else {
            tracing::debug!("Dropping unrecognised key {key:?}");
            continue;
        };
        let slot = fields.slot(field);
        if slot.is_none() {
            *slot = Some(value.clone());
        } else if key != field.contract_key() {
            tracing::debug!("Ignoring synonym {key:?}: {:?} already set", field);
        }
    }

    fields
}
