/// World units per grid cell. The input adapter snaps ground-plane hits to
/// cells of this size.
pub const CELL_SIZE: f32 = 1.0;

/// The interactive ground plane is `2 * GRID_HALF_EXTENT` cells across,
/// centred on the origin. Snapped cells therefore span
/// `-GRID_HALF_EXTENT..=GRID_HALF_EXTENT` on both axes.
pub const GRID_HALF_EXTENT: i32 = 20;

/// Treasury the economy collaborator starts with.
pub const STARTING_TREASURY: f64 = 10_000.0;

pub const ROAD_COST: f64 = 100.0;

/// Number of `(input, outcome)` pairs retained by the placement log.
pub const MAX_LOG_ENTRIES: usize = 64;

/// Longest drag line rasterized in one gesture. Cells past this are dropped.
pub const MAX_LINE_CELLS: usize = 256;

/// Controller notifications held until the host drains them. The oldest are
/// dropped once the queue is full.
pub const MAX_PENDING_EVENTS: usize = 1024;
