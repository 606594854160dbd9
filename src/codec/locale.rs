//! Turkish case folding.

/// Uppercase `s` following Turkish rules (`i` → `İ`, `ı` → `I`).
pub fn to_upper_tr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(c.to_uppercase()),
        }
    }
    out
}
