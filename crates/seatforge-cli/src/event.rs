use seatforge_core::attendees::Attendee;
use seatforge_core::error::SeatResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDef {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub vip_rows: usize,
}

/// On-disk event description consumed by every subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFile {
    pub venue: VenueDef,
    pub attendees: Vec<Attendee>,
}

impl EventFile {
    pub fn load<P: AsRef<Path>>(path: P) -> SeatResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
