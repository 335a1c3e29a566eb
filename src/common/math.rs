// Index wrapping and relative layout helpers

/// Next index in a list of `len` entries, wrapping from the last to the first
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Previous index in a list of `len` entries, wrapping from the first to the last
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

/// Convert a relative coordinate (0.0..1.0) into whole pixels of `extent`
pub fn rel_to_px(rel: f32, extent: f32) -> f32 {
    (rel * extent).round()
}
