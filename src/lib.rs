pub mod atom;
pub mod bond;
pub mod exact;
pub mod finder;
pub mod mol;
pub mod ring;
pub mod ring_atoms;
pub mod ring_systems;
pub mod small_rings;
pub mod sssr;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use exact::exact_sssr;
pub use finder::{find_rings, PerceptionError};
pub use mol::Mol;
pub use ring::Ring;
pub use ring_atoms::detect_ring_atoms;
pub use ring_systems::{create_ring_systems, RingSystem};
pub use small_rings::small_rings;
pub use sssr::verify_sssr;
