//! The guild roster
//!
//! An ordered collection of heroes. Traversal order is always append order;
//! name lookups are case-insensitive and act on the earliest match.

use serde::{Deserialize, Serialize};

use crate::hero::HeroRecord;

/// Ordered, exclusively owned collection of hero records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    heroes: Vec<HeroRecord>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self { heroes: Vec::new() }
    }

    /// Add a hero as the new tail
    pub fn append(&mut self, hero: HeroRecord) {
        log::debug!("{} has joined the guild", hero.name);
        self.heroes.push(hero);
    }

    /// Iterate heroes head to tail
    ///
    /// Borrowing iterator; call again to restart.
    pub fn iter(&self) -> std::slice::Iter<'_, HeroRecord> {
        self.heroes.iter()
    }

    /// Names in traversal order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.heroes.iter().map(|h| h.name.as_str())
    }

    /// First hero whose name matches case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&HeroRecord> {
        self.heroes.iter().find(|h| h.name_matches(name))
    }

    /// Remove the first hero whose name matches case-insensitively
    ///
    /// Returns `None` and leaves the roster untouched if nobody matches.
    pub fn remove_by_name(&mut self, name: &str) -> Option<HeroRecord> {
        let pos = self.heroes.iter().position(|h| h.name_matches(name))?;
        let hero = self.heroes.remove(pos);
        log::debug!("{} has left the guild", hero.name);
        Some(hero)
    }

    /// The first hero in traversal order (the guild leader)
    pub fn head(&self) -> Option<&HeroRecord> {
        self.heroes.first()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a HeroRecord;
    type IntoIter = std::slice::Iter<'a, HeroRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Roster {
    type Item = HeroRecord;
    type IntoIter = std::vec::IntoIter<HeroRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.heroes.into_iter()
    }
}

impl Extend<HeroRecord> for Roster {
    fn extend<I: IntoIterator<Item = HeroRecord>>(&mut self, iter: I) {
        for hero in iter {
            self.append(hero);
        }
    }
}

impl FromIterator<HeroRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = HeroRecord>>(iter: I) -> Self {
        let mut roster = Roster::new();
        roster.extend(iter);
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use proptest::prelude::*;

    fn hero(name: &str) -> HeroRecord {
        HeroRecord::classic(name, 10, 10, 10, "")
    }

    fn roster_of(names: &[&str]) -> Roster {
        names.iter().map(|n| hero(n)).collect()
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster.names().collect()
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.iter().count(), 0);
        assert!(roster.head().is_none());
        assert!(roster.find_by_name("anyone").is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut roster = Roster::new();
        roster.append(hero("Aldric"));
        roster.append(hero("Luna"));
        roster.append(hero("Kael"));
        assert_eq!(names(&roster), ["Aldric", "Luna", "Kael"]);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_traversal_is_restartable() {
        let roster = roster_of(&["A", "B"]);
        let first: Vec<_> = roster.iter().map(|h| h.name.clone()).collect();
        let second: Vec<_> = (&roster).into_iter().map(|h| h.name.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aldric_luna_scenario() {
        let mut roster = Roster::new();
        roster.append(
            HeroRecord::new("Aldric", "Warrior", Attributes::physical(18, 12, 16))
                .with_backstory("vet"),
        );
        roster.append(
            HeroRecord::new("Luna", "Rogue", Attributes::physical(12, 20, 14))
                .with_backstory("rogue"),
        );
        assert_eq!(names(&roster), ["Aldric", "Luna"]);

        let removed = roster.remove_by_name("aldric").unwrap();
        assert_eq!(removed.role, "Warrior");
        assert_eq!(names(&roster), ["Luna"]);
        assert_eq!(roster.head().unwrap().name, "Luna");
    }

    #[test]
    fn test_find_first_match() {
        let mut roster = Roster::new();
        roster.append(HeroRecord::classic("Kael", 1, 1, 1, "first"));
        roster.append(HeroRecord::classic("KAEL", 2, 2, 2, "second"));
        assert_eq!(roster.find_by_name("kael").unwrap().backstory, "first");
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut roster = Roster::new();
        roster.append(HeroRecord::classic("Kael", 1, 1, 1, "first"));
        roster.append(hero("Luna"));
        roster.append(HeroRecord::classic("Kael", 2, 2, 2, "second"));

        let removed = roster.remove_by_name("Kael").unwrap();
        assert_eq!(removed.backstory, "first");
        assert_eq!(names(&roster), ["Luna", "Kael"]);
        assert_eq!(roster.find_by_name("kael").unwrap().backstory, "second");
    }

    #[test]
    fn test_remove_head() {
        let mut roster = roster_of(&["A", "B", "C"]);
        roster.remove_by_name("a");
        assert_eq!(roster.head().unwrap().name, "B");
        assert_eq!(names(&roster), ["B", "C"]);
    }

    #[test]
    fn test_remove_only_hero() {
        let mut roster = roster_of(&["Solo"]);
        assert!(roster.remove_by_name("solo").is_some());
        assert!(roster.is_empty());
        assert!(roster.head().is_none());
    }

    #[test]
    fn test_remove_middle_and_tail() {
        let mut roster = roster_of(&["A", "B", "C", "D"]);
        roster.remove_by_name("C");
        assert_eq!(names(&roster), ["A", "B", "D"]);
        roster.remove_by_name("D");
        assert_eq!(names(&roster), ["A", "B"]);
    }

    #[test]
    fn test_remove_missing_leaves_roster_unchanged() {
        let mut roster = roster_of(&["A", "B"]);
        let before = roster.clone();
        assert!(roster.remove_by_name("Nobody").is_none());
        assert_eq!(roster, before);
    }

    proptest! {
        #[test]
        fn prop_traversal_matches_append_order(input in prop::collection::vec("[A-Za-z]{1,8}", 0..20)) {
            let mut roster = Roster::new();
            for name in &input {
                roster.append(hero(name));
            }
            let traversed: Vec<String> = roster.iter().map(|h| h.name.clone()).collect();
            prop_assert_eq!(traversed, input);
        }

        #[test]
        fn prop_remove_keeps_relative_order(
            input in prop::collection::vec("[a-z]{1,3}", 1..15),
            pick in any::<prop::sample::Index>(),
        ) {
            let roster: Roster = input.iter().map(|n| hero(n)).collect();
            let target = input[pick.index(input.len())].clone();
            let first = input.iter().position(|n| *n == target).unwrap();

            let mut expected = input.clone();
            expected.remove(first);

            let mut roster = roster;
            prop_assert!(roster.remove_by_name(&target).is_some());
            let remaining: Vec<String> = roster.names().map(str::to_string).collect();
            prop_assert_eq!(remaining, expected);
        }
    }
}
