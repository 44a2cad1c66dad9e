//! Statutory week-interval deadlines per dispute track.
//!
//! Each dispute track's regulation prescribes the week marks at which the
//! mediation must reach a milestone. One date computation pass covers
//! every track: offsets are unioned, and [`applies_to`] filters the rows
//! relevant to a given track.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// A dispute track and the week marks its regulation prescribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisputeTrack {
    pub name: &'static str,
    pub week_offsets: &'static [u32],
}

/// Week intervals per dispute track under the current regulation.
pub const DISPUTE_TRACKS: &[DisputeTrack] = &[
    DisputeTrack {
        name: "İş Hukuku Uyuşmazlıkları",
        week_offsets: &[3, 4],
    },
    DisputeTrack {
        name: "Ticaret Hukuku Uyuşmazlıkları",
        week_offsets: &[6, 8],
    },
    DisputeTrack {
        name: "Tüketici Hukuku Uyuşmazlıkları",
        week_offsets: &[3, 4],
    },
    DisputeTrack {
        name: "Kira İlişkisinden Kaynaklanan Uyuşmazlıklar",
        week_offsets: &[3, 4],
    },
    DisputeTrack {
        name: "Ortaklığın Giderilmesine İlişkin Uyuşmazlıklar",
        week_offsets: &[3, 4],
    },
    DisputeTrack {
        name: "Kat Mülkiyeti Kanunundan Kaynaklanan Uyuşmazlıklar",
        week_offsets: &[3, 4],
    },
    DisputeTrack {
        name: "Komşu Hukukundan Kaynaklanan Uyuşmazlıklar",
        week_offsets: &[3, 4],
    },
    DisputeTrack {
        name: "Tarımsal Üretim Sözleşmesinden Kaynaklanan Uyuşmazlıklar",
        week_offsets: &[2, 3, 4],
    },
];

/// All configured dispute tracks, in display order.
pub fn tracks() -> &'static [DisputeTrack] {
    DISPUTE_TRACKS
}

/// Target date for every distinct week offset across all tracks.
pub fn week_dates(start: NaiveDate) -> BTreeMap<u32, NaiveDate> {
    let mut dates = BTreeMap::new();
    for track in DISPUTE_TRACKS {
        for &week in track.week_offsets {
            dates
                .entry(week)
                .or_insert_with(|| start + Duration::weeks(i64::from(week)));
        }
    }
    dates
}

/// Whether `week` is one of the marks prescribed for the named track.
/// Unknown track names match nothing.
pub fn applies_to(track_name: &str, week: u32) -> bool {
    DISPUTE_TRACKS
        .iter()
        .find(|track| track.name == track_name)
        .is_some_and(|track| track.week_offsets.contains(&week))
}
