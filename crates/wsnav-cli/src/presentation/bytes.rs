const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;
const TB: u64 = 1 << 40;
const PB: u64 = 1 << 50;

/// Human-readable byte count: binary-unit steps with two decimals, exact
/// byte count below 1024.
pub fn format_bytes(bytes: u64) -> String {
    match bytes {
        b if b >= PB => format!("{:.2} PB", b as f64 / PB as f64),
        b if b >= TB => format!("{:.2} TB", b as f64 / TB as f64),
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}
