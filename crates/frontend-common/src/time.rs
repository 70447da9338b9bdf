//! Wall clock

/// Current Unix time, rounded to whole seconds
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0).round() as i64
}
