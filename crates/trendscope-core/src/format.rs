/// Format a count compactly: `1.2M`, `3.4K`, or the plain number below 1000.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
