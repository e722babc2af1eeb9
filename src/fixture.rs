use crate::domain::{NewPet, PetStatus, UpdatePet};
use rand::Rng;

/// Identifiers are sampled from a range wide enough to make collisions with
/// records already present in the shared public store practically negligible.
const MAX_FIXTURE_ID: u64 = 1_000_000;

/// The single test resource instance for one suite run.
///
/// Generated once, then read-only: every lifecycle step addresses the same id
/// and name, so the server echo can be checked by plain equality.
#[derive(Debug, Clone)]
pub struct PetFixture {
    id: u64,
    name: String,
}

impl PetFixture {
    pub fn generate() -> Self {
        Self::from_id(rand::thread_rng().gen_range(1..MAX_FIXTURE_ID))
    }

    fn from_id(id: u64) -> Self {
        Self {
            id,
            name: format!("petName_{}", id),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn new_pet(&self, status: PetStatus) -> NewPet {
        NewPet {
            id: self.id,
            name: self.name.clone(),
            status,
        }
    }

    pub fn update(&self, status: PetStatus) -> UpdatePet {
        UpdatePet {
            id: self.id,
            name: self.name.clone(),
            status,
        }
    }
}
