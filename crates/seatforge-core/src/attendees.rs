use crate::consts::DEFAULT_PRIORITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendeeKind {
    Vip,
    #[default]
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZonePreference {
    #[default]
    Any,
    Front,
    Middle,
    Back,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: AttendeeKind,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub preference: ZonePreference,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_priority() -> u8 {
    DEFAULT_PRIORITY
}

/// Attendee list plus the derived group and friendship indices.
///
/// Attendee `i` keeps the position it had in the input list; all derived
/// structures refer to attendees by that index.
#[derive(Debug, Clone)]
pub struct Roster {
    pub attendees: Vec<Attendee>,
    /// Group tag -> member indices, in input order.
    pub groups: BTreeMap<String, Vec<usize>>,
    /// Per attendee: the other members of its group, ascending.
    /// Empty for ungrouped attendees. Symmetric and irreflexive.
    pub friendships: Vec<Vec<usize>>,
}

impl Roster {
    pub fn new(mut attendees: Vec<Attendee>) -> Self {
        for a in &mut attendees {
            a.priority = a.priority.clamp(1, 10);
        }

        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, a) in attendees.iter().enumerate() {
            if let Some(tag) = &a.group {
                groups.entry(tag.clone()).or_default().push(i);
            }
        }

        let mut friendships = vec![Vec::new(); attendees.len()];
        for members in groups.values() {
            for &i in members {
                friendships[i] = members.iter().copied().filter(|&j| j != i).collect();
            }
        }

        Roster {
            attendees,
            groups,
            friendships,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }

    #[inline]
    pub fn is_vip(&self, i: usize) -> bool {
        self.attendees[i].kind == AttendeeKind::Vip
    }

    #[inline]
    pub fn priority(&self, i: usize) -> u8 {
        self.attendees[i].priority
    }

    /// Display identifier: the declared id, or the 0-based index.
    pub fn display_id(&self, i: usize) -> String {
        match &self.attendees[i].id {
            Some(id) => id.clone(),
            None => i.to_string(),
        }
    }

    /// Size of attendee `i`'s group (1 for ungrouped attendees).
    pub fn group_size(&self, i: usize) -> usize {
        self.attendees[i]
            .group
            .as_ref()
            .and_then(|tag| self.groups.get(tag))
            .map_or(1, Vec::len)
    }

    /// Whether attendees `i` and `j` share a group.
    pub fn same_group(&self, i: usize, j: usize) -> bool {
        match (&self.attendees[i].group, &self.attendees[j].group) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
