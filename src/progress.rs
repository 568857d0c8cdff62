//! Level progress bar
//!
//! The bar is a `.progress > span` whose width is the completed percentage.

/// Clamp to [0, 1] and round to a whole percentage. NaN counts as empty.
pub fn percent(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Inline style for the bar fill
pub fn width_style(value: f64) -> String {
    format!("width:{}%", percent(value))
}

/// Write the progress width onto the container's bar fill.
/// A container without a bar is left alone.
#[cfg(target_arch = "wasm32")]
pub fn set_progress(container: &web_sys::Element, value: f64) {
    use wasm_bindgen::JsCast;

    let fill = container
        .query_selector(crate::consts::PROGRESS_FILL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    if let Some(fill) = fill {
        let _ = fill
            .style()
            .set_property("width", &format!("{}%", percent(value)));
    }
}
