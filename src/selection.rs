//! Atom attribute predicates.
//!
//! The rendering engine targets styles, surfaces and camera framing at
//! subsets of atoms described by small JSON objects (`{"resn": "STI"}`,
//! `{"hetflag": false}`, ...). [`AtomSelection`] is the narrow set of
//! predicate forms the catalog needs; [`Selector`] adds the one combinator
//! the scene builder needs (everything *except* a selection).

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// A predicate over atoms of a loaded structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomSelection {
    /// Atoms whose hetero-group flag equals the given value.
    HetFlag(bool),
    /// Atoms belonging to residues with this name.
    Residue(&'static str),
    /// Atoms belonging to residues with any of these names.
    Residues(&'static [&'static str]),
}

impl AtomSelection {
    /// Whether the predicate can match anything at all.
    ///
    /// Name matches with an empty name, or a name set with no usable
    /// entries, select nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::HetFlag(_) => false,
            Self::Residue(name) => name.trim().is_empty(),
            Self::Residues(names) => {
                names.iter().all(|name| name.trim().is_empty())
            }
        }
    }

    /// Residue names this predicate matches, in declaration order.
    #[must_use]
    pub fn residue_names(&self) -> Vec<&'static str> {
        match self {
            Self::HetFlag(_) => Vec::new(),
            Self::Residue(name) => vec![*name],
            Self::Residues(names) => names.to_vec(),
        }
    }

    /// The engine-facing selection object.
    #[must_use]
    pub fn to_spec(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for AtomSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::HetFlag(flag) => map.serialize_entry("hetflag", flag)?,
            Self::Residue(name) => map.serialize_entry("resn", name)?,
            Self::Residues(names) => map.serialize_entry("resn", names)?,
        }
        map.end()
    }
}

/// How a scene step targets atoms relative to a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Atoms matching the selection.
    Matching(&'a AtomSelection),
    /// Atoms not matching the selection.
    Excluding(&'a AtomSelection),
}

impl Selector<'_> {
    /// The engine-facing selection object; exclusion is expressed with the
    /// engine's `not` key.
    #[must_use]
    pub fn to_spec(&self) -> Value {
        match self {
            Self::Matching(sel) => sel.to_spec(),
            Self::Excluding(sel) => serde_json::json!({ "not": sel.to_spec() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn predicate_specs() {
        assert_eq!(
            AtomSelection::HetFlag(false).to_spec(),
            json!({ "hetflag": false })
        );
        assert_eq!(
            AtomSelection::Residue("STI").to_spec(),
            json!({ "resn": "STI" })
        );
        assert_eq!(
            AtomSelection::Residues(&["NAG", "MAN"]).to_spec(),
            json!({ "resn": ["NAG", "MAN"] })
        );
    }

    #[test]
    fn excluding_wraps_in_not() {
        let sel = AtomSelection::Residue("AQ4");
        assert_eq!(
            Selector::Excluding(&sel).to_spec(),
            json!({ "not": { "resn": "AQ4" } })
        );
        assert_eq!(Selector::Matching(&sel).to_spec(), sel.to_spec());
    }

    #[test]
    fn emptiness() {
        assert!(!AtomSelection::HetFlag(true).is_empty());
        assert!(AtomSelection::Residue(" ").is_empty());
        assert!(AtomSelection::Residues(&[]).is_empty());
        assert!(!AtomSelection::Residues(&["", "OHT"]).is_empty());
        assert_eq!(
            AtomSelection::Residues(&["NAG", "MAN"]).residue_names(),
            vec!["NAG", "MAN"]
        );
    }
}
