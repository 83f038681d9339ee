//! The curated set of binder/target complexes the viewer can show.

use crate::selection::AtomSelection;

/// Static description of one complex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexDescriptor {
    /// PDB identifier, used as the fetch key.
    pub id: &'static str,
    /// Label shown in the complex selector.
    pub label: &'static str,
    /// Small-molecule binder name.
    pub binder: &'static str,
    /// Target macromolecule name.
    pub target: &'static str,
    /// Residue code(s) of the ligand as shown to the user.
    pub ligand_label: &'static str,
    /// Longer description for the details panel.
    pub summary: &'static str,
    /// Atoms making up the ligand.
    pub ligand_selection: AtomSelection,
    /// Hex color for ligand sticks.
    pub ligand_stick_color: &'static str,
    /// Hex color for ligand spheres and the translucent surface.
    pub ligand_surface_color: &'static str,
}

/// Known complexes. The first entry is the default selection.
pub static CATALOG: &[ComplexDescriptor] = &[
    ComplexDescriptor {
        id: "1OPJ",
        label: "Imatinib / BCR-ABL (1OPJ)",
        binder: "Imatinib",
        target: "BCR-ABL tyrosine kinase catalytic domain",
        ligand_label: "STI",
        summary: "The oncogenic driver in chronic myeloid leukemia, held in \
                  its inactive conformation by imatinib, a first-in-class \
                  ATP-competitive inhibitor.",
        ligand_selection: AtomSelection::Residue("STI"),
        ligand_stick_color: "#f97316",
        ligand_surface_color: "#fdba74",
    },
    ComplexDescriptor {
        id: "1M17",
        label: "Erlotinib / EGFR (1M17)",
        binder: "Erlotinib",
        target: "EGFR tyrosine kinase domain",
        ligand_label: "AQ4",
        summary: "Erlotinib occupies the ATP pocket of the epidermal growth \
                  factor receptor kinase, blocking signalling in non-small \
                  cell lung cancer.",
        ligand_selection: AtomSelection::Residue("AQ4"),
        ligand_stick_color: "#22d3ee",
        ligand_surface_color: "#a5f3fc",
    },
    ComplexDescriptor {
        id: "1HSG",
        label: "Indinavir / HIV-1 protease (1HSG)",
        binder: "Indinavir",
        target: "HIV-1 protease homodimer",
        ligand_label: "MK1",
        summary: "Indinavir mimics the tetrahedral transition state and sits \
                  between the two flaps of the viral aspartyl protease.",
        ligand_selection: AtomSelection::Residue("MK1"),
        ligand_stick_color: "#a3e635",
        ligand_surface_color: "#d9f99d",
    },
    ComplexDescriptor {
        id: "3ERT",
        label: "4-Hydroxytamoxifen / ER\u{3b1} (3ERT)",
        binder: "4-Hydroxytamoxifen",
        target: "Estrogen receptor \u{3b1} ligand-binding domain",
        ligand_label: "OHT",
        summary: "The active tamoxifen metabolite displaces helix 12 of the \
                  estrogen receptor, preventing coactivator recruitment.",
        ligand_selection: AtomSelection::Residue("OHT"),
        ligand_stick_color: "#f472b6",
        ligand_surface_color: "#fbcfe8",
    },
];

/// The default selection (first catalog entry).
#[must_use]
pub fn default_complex() -> &'static ComplexDescriptor {
    &CATALOG[0]
}

/// Look up a complex by PDB identifier (case-insensitive).
#[must_use]
pub fn find(id: &str) -> Option<&'static ComplexDescriptor> {
    let id = id.trim();
    CATALOG.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// Whether `complex` is one of the [`CATALOG`] entries themselves.
///
/// Compares addresses, so an equal copy made elsewhere is not a member.
#[must_use]
pub fn contains(complex: &ComplexDescriptor) -> bool {
    CATALOG.iter().any(|c| std::ptr::eq(c, complex))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_invariants() {
        assert!(!CATALOG.is_empty());

        let ids: HashSet<_> = CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATALOG.len(), "duplicate catalog id");

        for c in CATALOG {
            assert!(!c.ligand_selection.is_empty(), "{} has no ligand", c.id);
            assert_eq!(c.id.len(), 4);
            assert!(c.id.chars().all(|ch| ch.is_ascii_alphanumeric()));
            assert!(c.ligand_stick_color.starts_with('#'));
            assert!(c.ligand_surface_color.starts_with('#'));
        }
    }

    #[test]
    fn default_is_first_entry() {
        assert_eq!(default_complex().id, "1OPJ");
        assert_eq!(
            default_complex().ligand_selection,
            AtomSelection::Residue("STI")
        );
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("1m17").map(|c| c.binder), Some("Erlotinib"));
        assert_eq!(find(" 3ERT ").map(|c| c.ligand_label), Some("OHT"));
        assert!(find("9XYZ").is_none());
    }

    #[test]
    fn membership_is_by_identity() {
        assert!(CATALOG.iter().all(contains));
        let copy = default_complex().clone();
        assert!(!contains(&copy));
    }
}
