/// All rink and equipment identifiers are 64-bit integers assigned by the
/// booking platform.
pub type RinkId = i64;
pub type EquipmentId = i64;

/// All schedule times are rink-local wall-clock times. The calling layer
/// converts API instants to the rink's clock before handing them in.
pub type Timestamp = chrono::NaiveDateTime;
