// Geez Mapping Table
// Immutable phonetic-sequence to grapheme association, queried through a trie

mod builtin;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;

pub use builtin::GEEZ_MAPPINGS;

/// Result of walking the table with a candidate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLookup<'a> {
    /// Not a key, and no key starts with it
    Miss,
    /// Not a key, but some longer key starts with it
    Prefix,
    /// A key that no longer key extends
    Exact(&'a str),
    /// A key that is also the prefix of a longer key
    ExactAndPrefix(&'a str),
}

impl<'a> TableLookup<'a> {
    /// The grapheme when the sequence is itself a key.
    pub fn grapheme(self) -> Option<&'a str> {
        match self {
            Self::Exact(g) | Self::ExactAndPrefix(g) => Some(g),
            Self::Miss | Self::Prefix => None,
        }
    }

    /// Whether a strictly longer key starts with the sequence.
    pub fn extends(self) -> bool {
        matches!(self, Self::Prefix | Self::ExactAndPrefix(_))
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, Node>,
    /// Index into `MappingTable::entries`
    entry: Option<usize>,
}

/// Phonetic sequence to grapheme table.
///
/// Built once from an ordered list of `(sequence, grapheme)` rows and never
/// mutated afterwards. Sequences are case-folded on insertion so lookups with
/// lowercased input always agree with the stored keys. When a sequence is
/// registered more than once the last grapheme wins.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: IndexMap<String, String>,
    root: Node,
}

impl MappingTable {
    /// Build a table from ordered rows.
    pub fn from_entries<I, S, G>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, G)>,
        S: AsRef<str>,
        G: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (sequence, grapheme) in rows {
            let sequence = fold_sequence(sequence.as_ref());
            if sequence.is_empty() {
                log::warn!("Skipping mapping row with an empty sequence");
                continue;
            }
            let grapheme = grapheme.into();
            if let Some(previous) = entries.insert(sequence.clone(), grapheme) {
                log::trace!("Sequence {:?} re-registered, replacing {:?}", sequence, previous);
            }
        }
        Self::from_index(entries)
    }

    /// The bundled Ge'ez table.
    pub fn builtin() -> Arc<MappingTable> {
        static INSTANCE: OnceLock<Arc<MappingTable>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| Arc::new(MappingTable::from_entries(GEEZ_MAPPINGS.iter().copied())))
            .clone()
    }

    /// New table holding these entries followed by `overrides`.
    pub fn extended<I, S, G>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, G)>,
        S: AsRef<str>,
        G: Into<String>,
    {
        let own = self
            .entries
            .iter()
            .map(|(s, g)| (s.clone(), g.clone()));
        let extra = overrides
            .into_iter()
            .map(|(s, g)| {
                let grapheme: String = g.into();
                (s.as_ref().to_string(), grapheme)
            });
        Self::from_entries(own.chain(extra))
    }

    fn from_index(entries: IndexMap<String, String>) -> Self {
        let mut root = Node::default();
        for (index, sequence) in entries.keys().enumerate() {
            let mut node = &mut root;
            for ch in sequence.chars() {
                node = node.children.entry(ch).or_default();
            }
            node.entry = Some(index);
        }
        Self { entries, root }
    }

    pub fn lookup(&self, sequence: &str) -> TableLookup<'_> {
        if sequence.is_empty() {
            return TableLookup::Miss;
        }
        let mut node = &self.root;
        for ch in sequence.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return TableLookup::Miss,
            }
        }

        let has_children = !node.children.is_empty();
        let grapheme = node
            .entry
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, g)| g.as_str());
        match (grapheme, has_children) {
            (Some(g), true) => TableLookup::ExactAndPrefix(g),
            (Some(g), false) => TableLookup::Exact(g),
            (None, true) => TableLookup::Prefix,
            (None, false) => TableLookup::Miss,
        }
    }

    /// Grapheme registered for exactly this sequence.
    pub fn get(&self, sequence: &str) -> Option<&str> {
        self.lookup(sequence).grapheme()
    }

    /// Whether some key strictly longer than `sequence` starts with it.
    pub fn has_extension(&self, sequence: &str) -> bool {
        self.lookup(sequence).extends()
    }

    /// Whether any key contains `ch`.
    pub fn uses_symbol(&self, ch: char) -> bool {
        self.entries.keys().any(|k| k.contains(ch))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective entries, in order of first registration.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(s, g)| (s.as_str(), g.as_str()))
    }
}

/// Case-fold one keystroke character.
///
/// Characters whose lowercase form expands to several characters are kept
/// as they are, so one keystroke always occupies one buffer slot.
pub(crate) fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

fn fold_sequence(sequence: &str) -> String {
    sequence.chars().map(fold_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_exact_and_prefix() {
        let table = MappingTable::builtin();
        assert_eq!(table.lookup("h"), TableLookup::ExactAndPrefix("ሀ"));
        assert_eq!(table.lookup("he"), TableLookup::Exact("ሄ"));
    }

    #[test]
    fn test_builtin_prefix_only() {
        let table = MappingTable::builtin();
        assert_eq!(table.lookup("nyw"), TableLookup::Prefix);
    }

    #[test]
    fn test_miss() {
        let table = MappingTable::builtin();
        assert_eq!(table.lookup("zz"), TableLookup::Miss);
        assert_eq!(table.lookup("v"), TableLookup::Miss);
        assert_eq!(table.lookup(""), TableLookup::Miss);
    }

    #[test]
    fn test_builtin_duplicates_last_wins() {
        let table = MappingTable::builtin();
        assert_eq!(table.get("aa"), Some("ዐ"));
        assert_eq!(table.get("ch'"), Some("ጨ"));
        assert_eq!(table.get("ts'"), Some("ፀ"));
    }

    #[test]
    fn test_duplicate_registration_last_wins() {
        let table = MappingTable::from_entries([("ka", "A"), ("ki", "B"), ("ka", "C")]);
        assert_eq!(table.get("ka"), Some("C"));
        assert_eq!(table.len(), 2);
        // Position of the first registration is kept
        let order: Vec<_> = table.entries().collect();
        assert_eq!(order, vec![("ka", "C"), ("ki", "B")]);
    }

    #[test]
    fn test_keys_are_case_folded() {
        let table = MappingTable::from_entries([("Sh", "ሸ")]);
        assert_eq!(table.get("sh"), Some("ሸ"));
        assert_eq!(table.get("Sh"), None);
    }

    #[test]
    fn test_empty_sequence_skipped() {
        let table = MappingTable::from_entries([("", "x"), ("a", "አ")]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = MappingTable::default();
        assert!(table.is_empty());
        assert_eq!(table.lookup("a"), TableLookup::Miss);
        assert!(!table.has_extension("a"));
    }

    #[test]
    fn test_extended_overrides_apply_last() {
        let table = MappingTable::from_entries([("a", "1"), ("b", "2")]);
        let extended = table.extended([("b", "3"), ("c", "4")]);
        assert_eq!(extended.get("b"), Some("3"));
        assert_eq!(extended.get("c"), Some("4"));
        // The base table is untouched
        assert_eq!(table.get("b"), Some("2"));
        assert_eq!(table.get("c"), None);
    }

    #[test]
    fn test_uses_symbol() {
        let table = MappingTable::builtin();
        assert!(table.uses_symbol('\''));
        assert!(table.uses_symbol(':'));
        assert!(!table.uses_symbol('9'));
    }

    #[test]
    fn test_all_builtin_rows_resolve_to_effective_value() {
        let table = MappingTable::builtin();
        let mut expected: HashMap<&str, &str> = HashMap::new();
        for &(sequence, grapheme) in GEEZ_MAPPINGS {
            expected.insert(sequence, grapheme);
        }
        for (sequence, grapheme) in expected {
            assert_eq!(table.get(sequence), Some(grapheme), "sequence={sequence}");
        }
    }
}
