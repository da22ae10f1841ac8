/// Booking engine configuration
///
/// # Environment variables
///
/// All values can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BOOKING_WINDOW_DAYS | 60 | Browsable window length in days |
/// | PLATFORM_FEE_RATE | 0.01 | Fee rate on the post-discount subtotal |
/// | PLATFORM_FEE_MINIMUM | 7 | Flat minimum fee in currency units |
/// | DELIVERY_LEAD_DAYS | 5 | Days from stitching start to delivery |
/// | SLOT_START_HOUR | 8 | First slot start hour (24-hour clock) |
/// | SLOT_DURATION_HOURS | 2 | Slot length in hours |
/// | SLOT_COUNT | 7 | Number of slots per day |
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Browsable window length in days, counted from "today" inclusive
    pub booking_window_days: i64,
    /// Platform fee rate applied to the post-discount subtotal
    pub platform_fee_rate: f64,
    /// Flat minimum platform fee in currency units
    pub platform_fee_minimum: f64,
    /// Days between stitching start and delivery
    pub delivery_lead_days: i64,
    /// First slot start hour (24-hour clock)
    pub slot_start_hour: u32,
    /// Slot length in hours
    pub slot_duration_hours: u32,
    /// Number of slots per day
    pub slot_count: u32,
}

impl BookingConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            booking_window_days: env_parse("BOOKING_WINDOW_DAYS", defaults.booking_window_days),
            platform_fee_rate: env_parse("PLATFORM_FEE_RATE", defaults.platform_fee_rate),
            platform_fee_minimum: env_parse("PLATFORM_FEE_MINIMUM", defaults.platform_fee_minimum),
            delivery_lead_days: env_parse("DELIVERY_LEAD_DAYS", defaults.delivery_lead_days),
            slot_start_hour: env_parse("SLOT_START_HOUR", defaults.slot_start_hour),
            slot_duration_hours: env_parse("SLOT_DURATION_HOURS", defaults.slot_duration_hours),
            slot_count: env_parse("SLOT_COUNT", defaults.slot_count),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            booking_window_days: 60,
            platform_fee_rate: 0.01,
            platform_fee_minimum: 7.0,
            delivery_lead_days: 5,
            slot_start_hour: 8,
            slot_duration_hours: 2,
            slot_count: 7,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
