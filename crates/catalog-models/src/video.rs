use crate::media::CatalogId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideosResponse {
    pub id: CatalogId,
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    /// Hosting site, e.g. "YouTube"
    pub site: String,
    /// Video type, e.g. "Trailer", "Teaser", "Featurette"
    #[serde(rename = "type")]
    pub kind: String,
}
