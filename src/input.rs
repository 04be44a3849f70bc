use glam::Vec2;
use web_sys as web;

/// Offset of a client-space point from a rect's top-left corner.
#[inline]
pub fn offset_in_rect(client: Vec2, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new(client.x - rect_left as f32, client.y - rect_top as f32)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_offset(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    offset_in_rect(client, rect.left(), rect.top())
}

/// `clientWidth`/`clientHeight` of a connected element.
#[inline]
pub fn element_size(el: &web::Element) -> Option<Vec2> {
    el.is_connected()
        .then(|| Vec2::new(el.client_width().max(0) as f32, el.client_height().max(0) as f32))
}
