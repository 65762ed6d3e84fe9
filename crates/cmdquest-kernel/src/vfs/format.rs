//! Size and path formatting helpers.

/// Human-readable size with Chinese byte units.
///
/// Base 1024, at most two decimals with trailing zeros dropped, units capped
/// at GB. Zero renders as `0 字节`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["字节", "KB", "MB", "GB"];

    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{trimmed} {}", UNITS[unit])
}

/// Convert forward slashes to backslashes for display.
pub fn display_path(path: &str) -> String {
    path.replace('/', "\\")
}

/// Join a base path and further parts with `\`, collapsing duplicate
/// separators at the seams.
pub fn join_path(base: &str, parts: &[&str]) -> String {
    let mut out = base.trim_end_matches(['\\', '/']).to_string();
    for part in parts {
        let part = part.trim_matches(['\\', '/']);
        if part.is_empty() {
            continue;
        }
        out.push('\\');
        out.push_str(part);
    }
    if out.is_empty() || out.ends_with(':') {
        out.push('\\');
    }
    display_path(&out)
}
