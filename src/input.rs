use web_sys as web;

// ---------------- Pointer helpers ----------------
// Mouse and single-touch input are reduced to one client-space x coordinate.

#[inline]
pub fn mouse_client_x(ev: &web::MouseEvent) -> f64 {
    ev.client_x() as f64
}

/// First active touch point; `None` once every finger has lifted.
#[inline]
pub fn touch_client_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}
