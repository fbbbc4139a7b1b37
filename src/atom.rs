/// Default atom payload for a molecular graph node.
///
/// Ring perception reads only graph topology; these fields exist so the
/// downstream consumers of perceived rings (aromaticity, depiction,
/// nomenclature) can hang chemistry off the same graph without switching
/// container types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Number of virtual (suppressed) hydrogens on this atom.
    ///
    /// These are not graph nodes and therefore never participate in rings.
    pub hydrogen_count: u8,
    /// Whether this atom sits in an aromatic ring. Written by aromaticity
    /// perception after ring perception has run; never read here.
    pub is_aromatic: bool,
}
