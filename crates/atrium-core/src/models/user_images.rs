use serde::{Deserialize, Serialize};

/// Image URLs by size variant, as served by the directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserImages {
    #[serde(default)]
    pub standard: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}
