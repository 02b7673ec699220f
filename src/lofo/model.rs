use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Whether an item was lost by its poster or found by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Lost => write!(f, "lost"),
            ItemStatus::Found => write!(f, "found"),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lost" => Ok(ItemStatus::Lost),
            "found" => Ok(ItemStatus::Found),
            other => Err(format!("Unknown status: {} (expected lost|found)", other)),
        }
    }
}

/// The closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Accessories,
    Bags,
    Documents,
    #[serde(rename = "ID Card")]
    IdCard,
    Keys,
    Clothing,
    Books,
    Others,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Electronics,
        Category::Accessories,
        Category::Bags,
        Category::Documents,
        Category::IdCard,
        Category::Keys,
        Category::Clothing,
        Category::Books,
        Category::Others,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Bags => "Bags",
            Category::Documents => "Documents",
            Category::IdCard => "ID Card",
            Category::Keys => "Keys",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Campus zone a location belongs to. Used for grouped display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    AcademicBlocks,
    CampusCommonAreas,
    MensHostels,
    LadiesHostels,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::AcademicBlocks,
        Zone::CampusCommonAreas,
        Zone::MensHostels,
        Zone::LadiesHostels,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Zone::AcademicBlocks => "Academic Blocks",
            Zone::CampusCommonAreas => "Campus Common Areas",
            Zone::MensHostels => "Men's Hostels (MH)",
            Zone::LadiesHostels => "Ladies' Hostels (LH)",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The closed set of campus locations, grouped under four zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "AB-1 Block")]
    Ab1Block,
    #[serde(rename = "AB-2 Block")]
    Ab2Block,
    #[serde(rename = "CB (Central Block)")]
    CentralBlock,
    #[serde(rename = "Rock Plaza")]
    RockPlaza,
    #[serde(rename = "Food Street")]
    FoodStreet,
    #[serde(rename = "MH-1 Hostel")]
    Mh1Hostel,
    #[serde(rename = "MH-2 Hostel")]
    Mh2Hostel,
    #[serde(rename = "MH-3 Hostel")]
    Mh3Hostel,
    #[serde(rename = "MH-4 Hostel")]
    Mh4Hostel,
    #[serde(rename = "MH-5 Hostel")]
    Mh5Hostel,
    #[serde(rename = "LH-1 Hostel")]
    Lh1Hostel,
    #[serde(rename = "LH-2 Hostel")]
    Lh2Hostel,
    #[serde(rename = "LH-3 Hostel")]
    Lh3Hostel,
}

impl Location {
    pub const ALL: [Location; 13] = [
        Location::Ab1Block,
        Location::Ab2Block,
        Location::CentralBlock,
        Location::RockPlaza,
        Location::FoodStreet,
        Location::Mh1Hostel,
        Location::Mh2Hostel,
        Location::Mh3Hostel,
        Location::Mh4Hostel,
        Location::Mh5Hostel,
        Location::Lh1Hostel,
        Location::Lh2Hostel,
        Location::Lh3Hostel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::Ab1Block => "AB-1 Block",
            Location::Ab2Block => "AB-2 Block",
            Location::CentralBlock => "CB (Central Block)",
            Location::RockPlaza => "Rock Plaza",
            Location::FoodStreet => "Food Street",
            Location::Mh1Hostel => "MH-1 Hostel",
            Location::Mh2Hostel => "MH-2 Hostel",
            Location::Mh3Hostel => "MH-3 Hostel",
            Location::Mh4Hostel => "MH-4 Hostel",
            Location::Mh5Hostel => "MH-5 Hostel",
            Location::Lh1Hostel => "LH-1 Hostel",
            Location::Lh2Hostel => "LH-2 Hostel",
            Location::Lh3Hostel => "LH-3 Hostel",
        }
    }

    pub fn zone(&self) -> Zone {
        match self {
            Location::Ab1Block | Location::Ab2Block | Location::CentralBlock => {
                Zone::AcademicBlocks
            }
            Location::RockPlaza | Location::FoodStreet => Zone::CampusCommonAreas,
            Location::Mh1Hostel
            | Location::Mh2Hostel
            | Location::Mh3Hostel
            | Location::Mh4Hostel
            | Location::Mh5Hostel => Zone::MensHostels,
            Location::Lh1Hostel | Location::Lh2Hostel | Location::Lh3Hostel => Zone::LadiesHostels,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Location::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown location: {}", s))
    }
}

/// A posted lost/found item. Immutable after creation; the only lifecycle
/// transition is deletion by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: Location,
    pub status: ItemStatus,
    /// Contact phone; normalizes to exactly 10 digits (enforced at creation).
    pub phone: String,
    /// Registration number of the poster. Sole delete authorization.
    pub reg_no: String,
    /// Opaque image reference (URL or path). Blob handling is a caller concern.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(draft: ItemDraft, reg_no: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            status: draft.status,
            phone: draft.phone,
            reg_no,
            image: draft.image,
            created_at: Utc::now(),
        }
    }
}

/// User-supplied fields for a new item; `id`, `reg_no` and `created_at` are
/// assigned at creation.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: Location,
    pub status: ItemStatus,
    pub phone: String,
    pub image: Option<String>,
}
