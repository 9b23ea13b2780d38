// Wall-clock access, kept apart so the rules stay pure over `now_ms`.

/// Milliseconds since the Unix epoch, as reported by `Date.now()`.
pub fn now_ms() -> u64 {
    let now = js_sys::Date::now();
    if now.is_finite() && now > 0.0 { now as u64 } else { 0 }
}
