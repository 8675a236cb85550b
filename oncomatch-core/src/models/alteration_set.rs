use std::ops::Index;

use fxhash::FxHashSet;

use crate::models::alteration::{Alteration, AlterationKey};

///
/// Insertion-ordered set of alterations. Iteration order is priority order:
/// whatever was inserted first ranks first, and re-inserting a member keeps it
/// where it was.
///
#[derive(Debug, Clone, Default)]
pub struct AlterationSet {
    members: Vec<Alteration>,
    keys: FxHashSet<AlterationKey>,
}

impl AlterationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `alteration` was not already a member.
    pub fn insert(&mut self, alteration: Alteration) -> bool {
        if self.keys.insert(alteration.key()) {
            self.members.push(alteration);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, alteration: &Alteration) -> bool {
        self.keys.contains(&alteration.key())
    }

    ///
    /// Keep the members matching `keep`, preserving order.
    ///
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Alteration) -> bool,
    {
        let members = std::mem::take(&mut self.members);
        self.keys.clear();
        for alteration in members.into_iter().filter(|alt| keep(alt)) {
            self.insert(alteration);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alteration> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn first(&self) -> Option<&Alteration> {
        self.members.first()
    }

    pub fn as_slice(&self) -> &[Alteration] {
        &self.members
    }

    pub fn into_vec(self) -> Vec<Alteration> {
        self.members
    }

    /// Raw names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|alt| alt.alteration.as_str()).collect()
    }
}

impl Extend<Alteration> for AlterationSet {
    fn extend<T: IntoIterator<Item = Alteration>>(&mut self, iter: T) {
        for alteration in iter {
            self.insert(alteration);
        }
    }
}

impl<'a> Extend<&'a Alteration> for AlterationSet {
    fn extend<T: IntoIterator<Item = &'a Alteration>>(&mut self, iter: T) {
        for alteration in iter {
            self.insert(alteration.clone());
        }
    }
}

impl FromIterator<Alteration> for AlterationSet {
    fn from_iter<T: IntoIterator<Item = Alteration>>(iter: T) -> Self {
        let mut set = AlterationSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for AlterationSet {
    type Item = Alteration;
    type IntoIter = std::vec::IntoIter<Alteration>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a AlterationSet {
    type Item = &'a Alteration;
    type IntoIter = std::slice::Iter<'a, Alteration>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl Index<usize> for AlterationSet {
    type Output = Alteration;

    fn index(&self, index: usize) -> &Self::Output {
        &self.members[index]
    }
}

impl PartialEq for AlterationSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for AlterationSet {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::gene::Gene;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn alterations() -> Vec<Alteration> {
        let kras = Gene::new(3845, "KRAS");
        vec![
            Alteration::new(kras.clone(), "G12D"),
            Alteration::new(kras.clone(), "G12V"),
            Alteration::new(kras.clone(), "G13D"),
            Alteration::new(kras, "G12D").with_id(99),
        ]
    }

    #[rstest]
    fn test_insertion_order_and_dedup(alterations: Vec<Alteration>) {
        let set: AlterationSet = alterations.into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.names(), vec!["G12D", "G12V", "G13D"]);
        // the first inserted copy wins
        assert_eq!(set[0].id, None);
    }

    #[rstest]
    fn test_reinsert_keeps_position(alterations: Vec<Alteration>) {
        let mut set = AlterationSet::new();
        set.extend(&alterations[..3]);
        assert_eq!(set.insert(alterations[0].clone()), false);
        assert_eq!(set.names(), vec!["G12D", "G12V", "G13D"]);
    }

    #[rstest]
    fn test_retain(alterations: Vec<Alteration>) {
        let mut set: AlterationSet = alterations.into_iter().collect();
        set.retain(|alt| alt.alteration != "G12V");
        assert_eq!(set.names(), vec!["G12D", "G13D"]);

        let kras = Gene::new(3845, "KRAS");
        assert_eq!(set.contains(&Alteration::new(kras.clone(), "G12V")), false);
        assert_eq!(set.insert(Alteration::new(kras, "G12V")), true);
        assert_eq!(set.names(), vec!["G12D", "G13D", "G12V"]);
    }
}
