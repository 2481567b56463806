use crate::models::nutrition::NutritionRecord;

/// Nutrition values per 100g serving for a family of foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEntry {
    pub key: &'static str,
    pub calories: &'static str,
    pub protein: &'static str,
    pub carbohydrates: &'static str,
    pub fat: &'static str,
}

impl FallbackEntry {
    const fn new(
        key: &'static str,
        calories: &'static str,
        protein: &'static str,
        carbohydrates: &'static str,
        fat: &'static str,
    ) -> Self {
        Self {
            key,
            calories,
            protein,
            carbohydrates,
            fat,
        }
    }

    pub fn record(&self) -> NutritionRecord {
        NutritionRecord::new(self.calories, self.protein, self.carbohydrates, self.fat)
    }
}

/// Local lookup used when every remote tier failed.
///
/// Keys are lowercase and checked in declaration order. The `default` entry is kept apart from
/// the keyed entries so that a lookup always has something to return.
#[derive(Debug)]
pub struct FallbackTable {
    entries: &'static [FallbackEntry],
    default: FallbackEntry,
}

pub static FALLBACK_TABLE: FallbackTable = FallbackTable {
    entries: &[
        FallbackEntry::new("pizza", "285", "12", "36", "10"),
        FallbackEntry::new("samosa", "260", "5", "28", "15"),
        FallbackEntry::new("burger", "354", "20", "40", "17"),
        FallbackEntry::new("pasta", "220", "8", "43", "1"),
        FallbackEntry::new("salad", "100", "3", "10", "5"),
        FallbackEntry::new("bread", "265", "9", "49", "3"),
        FallbackEntry::new("rice", "204", "4", "45", "0.5"),
        FallbackEntry::new("steak", "252", "26", "0", "17"),
        FallbackEntry::new("chicken", "165", "31", "0", "3.6"),
        FallbackEntry::new("fish", "136", "22", "0", "5"),
        FallbackEntry::new("apple", "52", "0.3", "14", "0.2"),
        FallbackEntry::new("banana", "96", "1.2", "23", "0.2"),
        FallbackEntry::new("orange", "47", "0.9", "12", "0.1"),
        FallbackEntry::new("ice cream", "207", "3.5", "24", "11"),
        FallbackEntry::new("chocolate", "546", "5.5", "60", "31"),
    ],
    default: FallbackEntry::new("default", "250", "10", "30", "10"),
};

impl FallbackTable {
    pub fn entries(&self) -> &'static [FallbackEntry] {
        self.entries
    }

    /// Finds the entry for `label`: exact key first, then the first key that contains or is
    /// contained in the label, then `default`.
    ///
    /// An empty label is contained in every key and therefore resolves to the first entry.
    pub fn entry(&self, label: &str) -> &FallbackEntry {
        let label = label.to_lowercase();

        if let Some(entry) = self.entries.iter().find(|entry| entry.key == label) {
            return entry;
        }

        self.entries
            .iter()
            .find(|entry| label.contains(entry.key) || entry.key.contains(label.as_str()))
            .unwrap_or(&self.default)
    }

    pub fn lookup(&self, label: &str) -> NutritionRecord {
        self.entry(label).record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_key_match() {
        for entry in FALLBACK_TABLE.entries() {
            assert_eq!(FALLBACK_TABLE.entry(entry.key), entry);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(FALLBACK_TABLE.lookup("PIZZA"), FALLBACK_TABLE.lookup("pizza"));
        assert_eq!(FALLBACK_TABLE.entry("Ice Cream").key, "ice cream");
    }

    #[test]
    fn label_containing_a_key_matches_it() {
        assert_eq!(
            FALLBACK_TABLE.lookup("Cheesy Pizza Slice"),
            NutritionRecord::new("285", "12", "36", "10")
        );
        assert_eq!(FALLBACK_TABLE.entry("grilled chicken breast").key, "chicken");
    }

    #[test]
    fn key_containing_the_label_matches_it() {
        assert_eq!(FALLBACK_TABLE.entry("choc").key, "chocolate");
        assert_eq!(FALLBACK_TABLE.entry("ban").key, "banana");
    }

    #[test]
    fn first_matching_key_wins() {
        // both "rice" and "chicken" are in the label, "rice" is declared first
        assert_eq!(FALLBACK_TABLE.entry("chicken fried rice").key, "rice");
    }

    #[test]
    fn unknown_label_uses_default() {
        assert_eq!(
            FALLBACK_TABLE.lookup("xyz123"),
            NutritionRecord::new("250", "10", "30", "10")
        );
        assert_eq!(FALLBACK_TABLE.entry("default").key, "default");
    }

    #[test]
    fn empty_label_matches_first_entry() {
        assert_eq!(FALLBACK_TABLE.entry("").key, "pizza");
    }
}
