//! Application-wide defaults, limits and fixed names.

// # Upstream services

/// Coordinate to IANA timezone lookup.
pub const DEFAULT_TIMEZONE_ENDPOINT: &str = "https://timeapi.io/api/TimeZone/coordinate";

/// Sunrise, sunset and twilight times for a coordinate.
pub const DEFAULT_SUN_TIMES_ENDPOINT: &str = "https://api.sunrise-sunset.org/json";

// # Retry policy

/// Total number of attempts per request, the first one included.
pub const DEFAULT_RETRIES: u32 = 3;
pub const MINIMUM_RETRIES: u32 = 1;
pub const MAXIMUM_RETRIES: u32 = 10;

/// Fixed pause between attempts in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;
pub const MAXIMUM_RETRY_DELAY_MS: u64 = 60_000;

// # Coordinates

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

// # Wallpapers

pub const WALLPAPER_SUNRISE: &str = "sunrise.png";
pub const WALLPAPER_SUNSET: &str = "sunset.png";
pub const WALLPAPER_MORNING: &str = "morning.png";
pub const WALLPAPER_NOON: &str = "noon.png";
pub const WALLPAPER_EVENING: &str = "evening.png";
pub const WALLPAPER_NIGHT: &str = "night.png";

// # Files

pub const CONFIG_DIR_NAME: &str = "sunpaper";
pub const CONFIG_FILE_NAME: &str = "sunpaper.toml";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
