//! Pure thumb geometry.
//!
//! Conversions between a viewport's scroll offset and the pixel size/position
//! of the thumb inside its track. Every division here has an explicit
//! zero-denominator guard that collapses the result to 0 instead of producing
//! a non-finite value.

/// Calculate the thumb length for one axis.
///
/// The proportional length is `ceil(track_size * viewport_size /
/// scrollable_size)`. A result that reaches the full track length means the
/// content does not actually overflow, and 0 is returned to signal "no thumb
/// needed". Otherwise the length is clamped up to `minimal_size`.
///
/// `minimal_size` may exceed `track_size` for degenerate tiny tracks; the
/// clamp still applies and callers must accept the oversized result.
pub fn thumb_size(track_size: f32, scrollable_size: f32, viewport_size: f32, minimal_size: f32) -> f32 {
    if scrollable_size == 0.0 {
        return 0.0;
    }

    let proportional = (track_size * viewport_size / scrollable_size).ceil();
    if proportional >= track_size {
        // Content fits in the viewport
        return 0.0;
    }

    proportional.max(minimal_size)
}

/// Calculate the thumb offset within its track for a given scroll value.
///
/// Returns 0 when there is no thumb or no scrollable range.
pub fn thumb_offset(
    track_size: f32,
    thumb_size: f32,
    scrollable_size: f32,
    viewport_size: f32,
    scroll_value: f32,
) -> f32 {
    if thumb_size == 0.0 {
        return 0.0;
    }

    let scroll_range = scrollable_size - viewport_size;
    if scroll_range == 0.0 {
        return 0.0;
    }

    (scroll_value / scroll_range) * (track_size - thumb_size)
}

/// Calculate the scroll value a pointer offset inside the track maps to.
///
/// Inverse of [`thumb_offset`], centering the pointer on the thumb: the
/// half-thumb subtraction makes a click land the thumb's middle under the
/// pointer. Returns 0 when the thumb fills the track (no travel range).
pub fn scroll_for_offset(
    track_size: f32,
    thumb_size: f32,
    offset: f32,
    scrollable_size: f32,
    viewport_size: f32,
) -> f32 {
    if track_size == thumb_size {
        return 0.0;
    }

    ((offset - thumb_size / 2.0) / (track_size - thumb_size)) * (scrollable_size - viewport_size)
}

/// Mirror a thumb offset for right-to-left placement on the horizontal axis.
///
/// Input offsets are never mirrored; only the outgoing placement is.
pub fn rtl_thumb_offset(track_size: f32, thumb_size: f32, offset: f32) -> f32 {
    thumb_size + offset - track_size
}
