use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pet record as the API returns it.
///
/// `photoUrls` and `tags` are mandatory here on purpose: deserializing a
/// response into `Pet` doubles as the check that the server populated both
/// collections as arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub status: PetStatus,
    #[serde(rename = "photoUrls")]
    pub photo_urls: Vec<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<u64>,
    pub name: Option<String>,
}

/// Creation payload: everything beyond id, name and status is left to
/// server defaults.
#[derive(Debug, Clone, Serialize)]
pub struct NewPet {
    pub id: u64,
    pub name: String,
    pub status: PetStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePet {
    pub id: u64,
    pub name: String,
    pub status: PetStatus,
}
