use crate::model::id::TimeZoneId;
use crate::time::civil::CivilInstant;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use shared::error::AppResult;

/// Interprets bare calendar fields as civil time in `zone`, producing an
/// absolute instant.
///
/// Around DST transitions civil time is not one-to-one: an ambiguous wall
/// time takes the earlier of its two interpretations, and a wall time
/// inside a spring-forward gap resolves against the post-transition
/// offset. Deterministic for a fixed tz database.
pub fn interpret_in(civil: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    match zone.from_local_datetime(&civil) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            let offset = zone.offset_from_utc_datetime(&civil).fix();
            let utc = civil - Duration::seconds(i64::from(offset.local_minus_utc()));
            zone.from_utc_datetime(&utc)
        }
    }
}

/// "Keep local time": re-expresses the wall-clock fields of `instant`
/// under `zone`. The displayed numbers survive, the absolute instant does
/// not — this is intentionally not an instant-preserving conversion.
pub fn keep_local_time<Src: TimeZone>(instant: &DateTime<Src>, zone: Tz) -> DateTime<Tz> {
    interpret_in(instant.naive_local(), zone)
}

/// Converts a civil time typed by a user into the UTC instant persisted on
/// an event. The fields are read in the zone they were typed in, then
/// re-anchored to the event owner's zone keeping local time: a "3pm" is
/// taken to mean 3pm *in the owner's zone*, whatever zone it was typed in.
pub fn to_storage(
    civil: NaiveDateTime,
    target_zone: &TimeZoneId,
    source_zone: &TimeZoneId,
) -> AppResult<DateTime<Utc>> {
    let source = source_zone.chrono_tz()?;
    let target = target_zone.chrono_tz()?;

    let entered = interpret_in(civil, source);
    let anchored = keep_local_time(&entered, target);

    // The zone name is dropped here. Storage is plain UTC, so a later DST
    // rule change in the owner's zone shifts the recovered wall time.
    Ok(anchored.with_timezone(&Utc))
}

/// Converts a stored UTC instant into the civil time shown to a viewer:
/// a true instant conversion into `viewer_zone`, then the resulting wall
/// fields laid out under `render_zone` (the environment the viewer is
/// looking from) keeping local time.
pub fn to_display(
    stored: DateTime<Utc>,
    viewer_zone: &TimeZoneId,
    render_zone: &TimeZoneId,
) -> AppResult<CivilInstant> {
    let viewer = viewer_zone.chrono_tz()?;
    let render = render_zone.chrono_tz()?;

    let profile = stored.with_timezone(&viewer);
    let rendered = keep_local_time(&profile, render);

    Ok(CivilInstant::from_zoned(&rendered))
}
