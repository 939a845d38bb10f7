use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// `#debug` in the URL hash raises logging verbosity; the on-screen panel
/// itself lives outside this crate.
pub fn debug_enabled() -> bool {
    web::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h == "#debug")
        .unwrap_or(false)
}
