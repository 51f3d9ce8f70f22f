use kernel::model::request::RequestStatus;
use serde::Serialize;

/// One row of the administrative table: the same stored instant rendered
/// in both parties' home zones, plus the raw UTC value for debugging.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequestRow {
    pub requestor_name: String,
    pub requestor_zone_instant: String,
    pub requestee_name: String,
    pub requestee_zone_instant: String,
    pub stored_instant: String,
    pub status: RequestStatus,
}
