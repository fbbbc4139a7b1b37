#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

/// Default bond payload for a molecular graph edge.
///
/// Bond order never influences ring perception (a double bond closes a ring
/// exactly like a single one), but rings hand their bonds to aromaticity and
/// depiction, which do care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bond {
    pub order: BondOrder,
}
