/// Number of seasons in one calendar cycle
pub const SEASON_COUNT: usize = 4;

/// Days in every season
pub const DAYS_PER_SEASON: u8 = 28;

/// First day of a season
pub const MIN_DAY: u8 = 1;

/// Ordinal reported for a date whose season cannot be resolved or whose day
/// is past the end of the season
pub const INVALID_ORDINAL: i32 = -1;

/// Default season names, in calendar order
pub const DEFAULT_SEASON_NAMES: [&str; SEASON_COUNT] = ["Primavera", "Verão", "Outono", "Inverno"];

/// Number of day columns in the calendar grid
pub const DAYS_PER_WEEK: usize = 7;

/// Weekday header letters shown above the day grid (Monday first)
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["S", "T", "Q", "Q", "S", "S", "D"];

/// Prefix in front of the day number in a date label (`Spring D5`)
pub const DAY_PREFIX: char = 'D';

/// Separator between the two labels of a completed range
pub const RANGE_SEPARATOR: &str = " -> ";

/// Marker downstream consumers look for to tell a complete range from a single date
pub const RANGE_MARKER: &str = "->";

/// Delay between two animation frames (~60Hz)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Length of a hover color transition
pub const DEFAULT_TRANSITION_MS: u64 = 150;
