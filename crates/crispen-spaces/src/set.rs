//! Ordered, name-keyed collection of color spaces.
//!
//! Entries are identified by name alone, compared case-insensitively. The set
//! owns a private copy of everything it holds: values are cloned on the way in,
//! and callers only ever get shared borrows back.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color_space::{ColorSpace, ColorSpaceDesc};
use crate::error::{SpacesError, empty_name_error};
use crate::name::{is_blank, names_match};

/// A small ordered set of uniquely-named color spaces.
///
/// Lookups are linear scans; sets are expected to hold tens of entries.
#[derive(Debug, Clone)]
pub struct ColorSpaceSet<C = ColorSpaceDesc> {
    entries: Vec<C>,
}

impl<C> Default for ColorSpaceSet<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: ColorSpace> ColorSpaceSet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep copy of this set. Mutating either set never affects the other.
    pub fn create_editable_copy(&self) -> Self {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in insertion order, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&C> {
        self.entries.get(index)
    }

    /// Name of the entry at `index`, or `None` when out of range.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(ColorSpace::name)
    }

    /// Entry whose name matches `name` case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&C> {
        self.entries.iter().find(|cs| names_match(cs.name(), name))
    }

    /// Position of the entry whose name matches `name` case-insensitively.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|cs| names_match(cs.name(), name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(ColorSpace::name)
    }

    /// Insert a copy of `color_space`, replacing any entry with the same name.
    ///
    /// A replaced entry keeps its position; a new one is appended. Fails with
    /// [`SpacesError::InvalidArgument`] if the name is empty or whitespace,
    /// leaving the set untouched.
    pub fn add(&mut self, color_space: &C) -> Result<(), SpacesError> {
        if is_blank(color_space.name()) {
            tracing::debug!("rejected color space with an empty name");
            return Err(empty_name_error());
        }
        self.insert_unchecked(color_space.clone());
        Ok(())
    }

    /// Add a copy of every entry of `other`, in `other`'s order.
    pub fn add_all(&mut self, other: &Self) {
        for cs in &other.entries {
            self.insert_unchecked(cs.clone());
        }
    }

    /// Remove the entry named `name`. Unknown or empty names are ignored.
    pub fn remove(&mut self, name: &str) {
        if let Some(index) = self.index_of(name) {
            let removed = self.entries.remove(index);
            tracing::debug!("removed color space '{}' at {}", removed.name(), index);
        }
    }

    /// Remove every entry whose name appears in `other`.
    pub fn remove_all(&mut self, other: &Self) {
        for name in other.names() {
            self.remove(name);
        }
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!("cleared {} color spaces", self.entries.len());
            self.entries.clear();
        }
    }

    /// Upsert an owned value whose name is already known to be non-blank.
    pub(crate) fn insert_unchecked(&mut self, color_space: C) {
        match self.index_of(color_space.name()) {
            Some(index) => {
                tracing::debug!("replaced color space '{}' at {}", color_space.name(), index);
                self.entries[index] = color_space;
            }
            None => {
                tracing::debug!("appended color space '{}'", color_space.name());
                self.entries.push(color_space);
            }
        }
    }
}

impl ColorSpaceSet<ColorSpaceDesc> {
    /// Entries tagged with `category` (case-insensitive), in set order.
    pub fn filter_by_category(&self, category: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|cs| cs.has_category(category))
                .cloned()
                .collect(),
        }
    }
}

/// Sets are equal when they hold the same names. Entry contents are ignored.
impl<C: ColorSpace> PartialEq for ColorSpaceSet<C> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len() && self.names().all(|name| other.contains(name))
    }
}

impl<C: ColorSpace> Eq for ColorSpaceSet<C> {}

impl<'a, C> IntoIterator for &'a ColorSpaceSet<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a set by adding each value in order; later duplicates replace
/// earlier ones in place.
impl<C: ColorSpace> TryFrom<Vec<C>> for ColorSpaceSet<C> {
    type Error = SpacesError;

    fn try_from(entries: Vec<C>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for cs in entries {
            if is_blank(cs.name()) {
                return Err(empty_name_error());
            }
            set.insert_unchecked(cs);
        }
        Ok(set)
    }
}

impl<C: ColorSpace + Serialize> Serialize for ColorSpaceSet<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl<'de, C: ColorSpace + Deserialize<'de>> Deserialize<'de> for ColorSpaceSet<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<C>::deserialize(deserializer)?;
        Self::try_from(entries).map_err(serde::de::Error::custom)
    }
}

impl<C: ColorSpace + DeserializeOwned> ColorSpaceSet<C> {
    /// Parse a JSON array of color spaces.
    pub fn from_json(json: &str) -> Result<Self, SpacesError> {
        let entries: Vec<C> = serde_json::from_str(json)?;
        Self::try_from(entries)
    }
}

impl<C: ColorSpace + Serialize> ColorSpaceSet<C> {
    pub fn to_json(&self) -> Result<String, SpacesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cs(name: &str, description: &str) -> ColorSpaceDesc {
        ColorSpaceDesc::new(name).with_description(description)
    }

    fn set_of(names: &[&str]) -> ColorSpaceSet {
        let mut set = ColorSpaceSet::new();
        for name in names {
            set.add(&ColorSpaceDesc::new(*name)).unwrap();
        }
        set
    }

    fn names(set: &ColorSpaceSet) -> Vec<&str> {
        set.names().collect()
    }

    #[test]
    fn test_new_set_is_empty() {
        let set: ColorSpaceSet = ColorSpaceSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.get(0).is_none());
    }

    #[test]
    fn test_add_upserts_in_place() {
        let mut set = ColorSpaceSet::new();
        set.add(&cs("sRGB", "first")).unwrap();
        assert_eq!(names(&set), vec!["sRGB"]);

        set.add(&cs("ACEScg", "")).unwrap();
        assert_eq!(names(&set), vec!["sRGB", "ACEScg"]);

        set.add(&cs("srgb", "second")).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.index_of("sRGB"), Some(0));
        assert_eq!(set.get(0).unwrap().description, "second");
        assert_eq!(set.name_at(0), Some("srgb"));
        assert_eq!(set.name_at(1), Some("ACEScg"));
    }

    #[test]
    fn test_add_copies_the_value() {
        let mut source = cs("ACEScct", "before");
        let mut set = ColorSpaceSet::new();
        set.add(&source).unwrap();

        source.description = "after".to_string();
        assert_eq!(set.by_name("ACEScct").unwrap().description, "before");
    }

    #[test]
    fn test_add_rejects_empty_names() {
        let mut set = set_of(&["sRGB"]);
        for bad in ["", "   ", "\t\n"] {
            let err = set.add(&ColorSpaceDesc::new(bad)).unwrap_err();
            assert!(matches!(err, SpacesError::InvalidArgument(_)));
        }
        assert_eq!(names(&set), vec!["sRGB"]);
    }

    #[test]
    fn test_empty_name_error_message() {
        let err = ColorSpaceSet::new().add(&ColorSpaceDesc::new("")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: cannot add a color space with an empty name"
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let set = set_of(&["ACEScg", "sRGB"]);
        let expected = set.get(1).unwrap();
        for query in ["SRGB", "sRGB", "srgb"] {
            assert_eq!(set.by_name(query), Some(expected));
            assert_eq!(set.index_of(query), Some(1));
        }
    }

    #[test]
    fn test_lookup_misses() {
        let set = set_of(&["ACEScg"]);
        assert!(set.by_name("").is_none());
        assert!(set.by_name("ACES").is_none());
        assert_eq!(set.index_of(""), None);
        assert_eq!(set.index_of("Rec.2020"), None);
        assert!(!set.contains("Rec.2020"));
    }

    #[test]
    fn test_index_queries_are_bounds_safe() {
        let set = set_of(&["ACEScg", "sRGB"]);
        assert!(set.get(set.len()).is_none());
        assert!(set.get(usize::MAX).is_none());
        assert_eq!(set.name_at(2), None);
        assert_eq!(set.name_at(usize::MAX), None);
    }

    #[test]
    fn test_add_all_preserves_existing_positions() {
        let mut set = set_of(&["A", "B"]);
        let other = set_of(&["c", "b", "D"]);
        set.add_all(&other);
        assert_eq!(names(&set), vec!["A", "b", "c", "D"]);
    }

    #[test]
    fn test_remove() {
        let mut set = set_of(&["A", "B", "C"]);
        set.remove("b");
        assert_eq!(names(&set), vec!["A", "C"]);

        set.remove("missing");
        set.remove("");
        assert_eq!(names(&set), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_all() {
        let mut set = set_of(&["A", "B", "C", "D"]);
        set.remove_all(&set_of(&["d", "x", "A"]));
        assert_eq!(names(&set), vec!["B", "C"]);
    }

    #[test]
    fn test_clear() {
        let mut set = set_of(&["A", "B"]);
        set.clear();
        assert!(set.is_empty());
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_editable_copy_is_independent() {
        let mut a = set_of(&["A", "B"]);
        let mut b = a.create_editable_copy();
        b.add(&ColorSpaceDesc::new("C")).unwrap();
        b.add(&cs("A", "changed")).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a.by_name("A").unwrap().description, "");

        a.remove("B");
        assert_eq!(names(&b), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_equality_compares_names_only() {
        let mut a = ColorSpaceSet::new();
        a.add(&cs("sRGB", "one")).unwrap();
        a.add(&cs("ACEScg", "one")).unwrap();

        let mut b = ColorSpaceSet::new();
        b.add(&cs("acescg", "two")).unwrap();
        b.add(&cs("SRGB", "two")).unwrap();
        assert_eq!(a, b);

        b.remove("sRGB");
        b.add(&ColorSpaceDesc::new("Rec.2020")).unwrap();
        assert_ne!(a, b);

        b.remove("Rec.2020");
        assert_ne!(a, b);
    }

    #[test]
    fn test_filter_by_category() {
        let mut set = ColorSpaceSet::new();
        set.add(&ColorSpaceDesc::new("ACEScg").with_category("working-space"))
            .unwrap();
        set.add(&ColorSpaceDesc::new("sRGB").with_category("file-io"))
            .unwrap();
        set.add(&ColorSpaceDesc::new("ACEScct").with_category("Working-Space"))
            .unwrap();

        let filtered = set.filter_by_category("WORKING-SPACE");
        assert_eq!(names(&filtered), vec!["ACEScg", "ACEScct"]);
        assert!(set.filter_by_category("").is_empty());
    }

    #[test]
    fn test_try_from_vec_upserts() {
        let set = ColorSpaceSet::try_from(vec![
            cs("A", "1"),
            cs("B", "1"),
            cs("a", "2"),
        ])
        .unwrap();
        assert_eq!(names(&set), vec!["a", "B"]);
        assert_eq!(set.get(0).unwrap().description, "2");

        let err = ColorSpaceSet::try_from(vec![cs("A", ""), cs(" ", "")]).unwrap_err();
        assert!(matches!(err, SpacesError::InvalidArgument(_)));
    }

    #[test]
    fn test_json_keeps_order_and_content() {
        let set = set_of(&["Rec.2020", "ACEScg", "sRGB"]);
        let json = set.to_json().unwrap();
        let loaded: ColorSpaceSet = ColorSpaceSet::from_json(&json).unwrap();
        assert_eq!(names(&loaded), vec!["Rec.2020", "ACEScg", "sRGB"]);
        assert_eq!(loaded.get(1), set.get(1));
    }

    #[test]
    fn test_to_json_only_needs_serialize() {
        #[derive(Clone, Serialize)]
        struct Label<'a> {
            name: &'a str,
        }

        impl ColorSpace for Label<'_> {
            fn name(&self) -> &str {
                self.name
            }
        }

        let mut set = ColorSpaceSet::new();
        set.add(&Label { name: "ACEScg" }).unwrap();
        set.add(&Label { name: "sRGB" }).unwrap();
        let json = set.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "ACEScg");
        assert_eq!(value[1]["name"], "sRGB");
    }

    #[test]
    fn test_json_rejects_empty_names() {
        let err = ColorSpaceSet::<ColorSpaceDesc>::from_json(r#"[{ "name": "" }]"#)
            .unwrap_err();
        assert!(matches!(err, SpacesError::InvalidArgument(_)));

        let err = ColorSpaceSet::<ColorSpaceDesc>::from_json("{").unwrap_err();
        assert!(matches!(err, SpacesError::Json(_)));

        // Nested sets go through the serde path rather than `from_json`.
        let nested: Result<Vec<ColorSpaceSet>, _> =
            serde_json::from_str(r#"[[{ "name": " " }]]"#);
        assert!(nested.is_err());
    }
}
