use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub name: String,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub name: String,
    pub votes: u32,
}

/// Vote counts keyed by candidate name, kept in the order names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.votes)
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Adds `name` with zero votes. Returns false if it was already present.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.get(name).is_some() {
            return false;
        }
        self.entries.push(TallyEntry { name: name.to_string(), votes: 0 });
        true
    }

    pub fn increment(&mut self, name: &str) -> u32 {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.votes = entry.votes.saturating_add(1);
                entry.votes
            }
            None => {
                self.entries.push(TallyEntry { name: name.to_string(), votes: 1 });
                1
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// First entry holding the highest count, scanning in insertion order.
    pub fn winner(&self) -> Option<Winner> {
        self.entries.iter()
            .fold(None::<&TallyEntry>, |best, entry| match best {
                Some(b) if entry.votes <= b.votes => Some(b),
                _ => Some(entry),
            })
            .map(|e| Winner { name: e.name.clone(), votes: e.votes })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.votes)?;
        }
        map.end()
    }
}

struct TallyVisitor;

impl<'de> Visitor<'de> for TallyVisitor {
    type Value = Tally;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of candidate names to vote counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Tally, A::Error> {
        let mut tally = Tally::new();
        while let Some((name, votes)) = access.next_entry::<String, u32>()? {
            match tally.entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.votes = votes,
                None => tally.entries.push(TallyEntry { name, votes }),
            }
        }
        Ok(tally)
    }
}

impl<'de> Deserialize<'de> for Tally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TallyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(counts: &[(&str, u32)]) -> Tally {
        let mut t = Tally::new();
        for (name, votes) in counts {
            t.ensure(name);
            for _ in 0..*votes {
                t.increment(name);
            }
        }
        t
    }

    #[test]
    fn test_first_maximum_wins() {
        let t = tally(&[("A", 3), ("B", 5), ("C", 5)]);
        assert_eq!(t.winner(), Some(Winner { name: "B".into(), votes: 5 }));
    }

    #[test]
    fn test_empty_has_no_winner() {
        assert_eq!(Tally::new().winner(), None);
    }

    #[test]
    fn test_all_zero_picks_first() {
        let t = tally(&[("A", 0), ("B", 0)]);
        assert_eq!(t.winner(), Some(Winner { name: "A".into(), votes: 0 }));
    }

    #[test]
    fn test_ensure_leaves_existing_counts() {
        let mut t = tally(&[("A", 2)]);
        assert!(!t.ensure("A"));
        assert!(t.ensure("B"));
        assert_eq!(t.get("A"), Some(2));
        assert_eq!(t.get("B"), Some(0));
    }

    #[test]
    fn test_json_keeps_insertion_order() {
        let t = tally(&[("Zoe", 1), ("Ana", 4), ("Luis", 0)]);
        assert_eq!(t.to_json().unwrap(), r#"{"Zoe":1,"Ana":4,"Luis":0}"#);

        let parsed = Tally::from_json(r#"{"Zoe":1,"Ana":4,"Luis":0}"#).unwrap();
        let names: Vec<_> = parsed.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Zoe", "Ana", "Luis"]);
        assert_eq!(parsed, t);
    }

    #[test]
    fn test_rejects_negative_counts() {
        assert!(Tally::from_json(r#"{"A":-1}"#).is_err());
        assert!(Tally::from_json("[1,2]").is_err());
    }
}
