mod pet;

pub use pet::{NewPet, Pet, PetStatus, Tag, UpdatePet};
