const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable size in binary units, e.g. `1536` -> `"1.5 KB"`.
///
/// Up to two fractional digits, `,` between thousands. Sizes past the
/// gigabyte range stay in GB.
pub fn format_size(size: u64) -> String {
    if size == 0 {
        return "0 B".to_string();
    }

    let group = ((size.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let scaled = size as f64 / 1024f64.powi(group as i32);

    let fixed = format!("{scaled:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out.push(' ');
    out.push_str(UNITS[group]);
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
