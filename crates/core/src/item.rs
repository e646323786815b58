//! Catalog items and the key used to match them.

use serde::{Deserialize, Serialize};

/// A catalog entry: something that can be lent out.
///
/// Items are matched by a key extracted through [`KeyFn`], which is the name by
/// default ([`by_name`]). Two distinct items that share a name are therefore
/// indistinguishable to every store, library and reader lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    identifier: String,
    borrow_fee: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>, borrow_fee: f64) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            borrow_fee,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn borrow_fee(&self) -> f64 {
        self.borrow_fee
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn set_borrow_fee(&mut self, borrow_fee: f64) {
        self.borrow_fee = borrow_fee;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.identifier)
    }
}

/// Extracts the lookup key of an item.
///
/// Every lookup site (store availability, store membership, outstanding records)
/// takes one of these explicitly.
pub type KeyFn = fn(&Item) -> &str;

/// The default key: items are the same item when their names are equal.
pub fn by_name(item: &Item) -> &str {
    item.name()
}

/// Returns true iff `a` and `b` share a key under `key`.
pub fn same_key(key: KeyFn, a: &Item, b: &Item) -> bool {
    key(a) == key(b)
}

/// Position of the first entry in `items` sharing `item`'s key.
pub fn position_by_key(key: KeyFn, items: &[Item], item: &Item) -> Option<usize> {
    items.iter().position(|candidate| same_key(key, candidate, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_default_key() {
        let a = Item::new("Dune", "isbn-1", 10.0);
        let b = Item::new("Dune", "isbn-2", 99.0);
        let c = Item::new("Emma", "isbn-1", 10.0);

        assert!(same_key(by_name, &a, &b));
        assert!(!same_key(by_name, &a, &c));
    }

    #[test]
    fn position_finds_first_match() {
        let items = vec![
            Item::new("Emma", "isbn-0", 1.0),
            Item::new("Dune", "isbn-1", 1.0),
            Item::new("Dune", "isbn-2", 1.0),
        ];
        let probe = Item::new("Dune", "other", 5.0);

        assert_eq!(position_by_key(by_name, &items, &probe), Some(1));
        assert_eq!(
            position_by_key(by_name, &items, &Item::new("Ulysses", "x", 1.0)),
            None
        );
    }

    #[test]
    fn custom_key_changes_matching() {
        fn by_identifier(item: &Item) -> &str {
            item.identifier()
        }

        let a = Item::new("Dune", "isbn-1", 10.0);
        let b = Item::new("Dune", "isbn-2", 10.0);
        assert!(!same_key(by_identifier, &a, &b));
    }

    #[test]
    fn setters_replace_fields() {
        let mut item = Item::new("Dune", "isbn-1", 10.0);
        item.set_name("Dune Messiah");
        item.set_identifier("isbn-9");
        item.set_borrow_fee(12.5);

        assert_eq!(item.name(), "Dune Messiah");
        assert_eq!(item.identifier(), "isbn-9");
        assert_eq!(item.borrow_fee(), 12.5);
        assert_eq!(item.to_string(), "Dune Messiah (isbn-9)");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the reported position is the first entry sharing the key.
            #[test]
            fn position_is_first_match(
                names in prop::collection::vec("[a-c]", 0..20),
                probe in "[a-d]"
            ) {
                let items: Vec<Item> = names
                    .iter()
                    .enumerate()
                    .map(|(i, n)| Item::new(n.clone(), format!("id-{i}"), 1.0))
                    .collect();
                let probe = Item::new(probe, "probe", 1.0);

                let expected = names.iter().position(|n| n == probe.name());
                prop_assert_eq!(position_by_key(by_name, &items, &probe), expected);
            }
        }
    }
}
