#![allow(dead_code)]

use seatforge_core::attendees::{Attendee, AttendeeKind, ZonePreference};

pub fn regular(priority: u8, group: Option<&str>) -> Attendee {
    Attendee {
        id: None,
        kind: AttendeeKind::Regular,
        group: group.map(String::from),
        preference: ZonePreference::Any,
        priority,
    }
}

pub fn vip(priority: u8) -> Attendee {
    Attendee {
        id: None,
        kind: AttendeeKind::Vip,
        group: None,
        preference: ZonePreference::Any,
        priority,
    }
}

pub fn named(id: &str, kind: AttendeeKind, group: Option<&str>) -> Attendee {
    Attendee {
        id: Some(id.to_string()),
        kind,
        group: group.map(String::from),
        preference: ZonePreference::Any,
        priority: 5,
    }
}
