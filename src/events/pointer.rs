use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::camera::screen_to_world_ray;
use crate::captions;
use crate::core::{PointerPicker, SelectionChange, SphereField};
use crate::dom;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<SphereField>>,
    pub picker: Rc<RefCell<PointerPicker>>,
    /// Shared elapsed-seconds clock, written by the frame loop.
    pub elapsed: Rc<RefCell<f32>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

/// Convert a pointer event's client coordinates to canvas backing-store
/// pixels.
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let mut picker = w.picker.borrow_mut();
        let prev = picker.pos;
        let was_down = picker.is_down();
        picker.pointer_moved(pos);
        drop(picker);

        // A pressed move is an orbit drag; movement also marks the gesture
        // as a drag above, suppressing the click on release.
        if was_down {
            let h = w.canvas.height().max(1) as f32;
            let mut field = w.field.borrow_mut();
            field
                .camera
                .apply_drag((pos.x - prev.x) / h, (pos.y - prev.y) / h);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.picker.borrow_mut().pointer_down(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let elapsed = *w.elapsed.borrow();
        let mut field = w.field.borrow_mut();
        let (ro, rd) = screen_to_world_ray(&w.canvas, pos.x, pos.y, field.camera.eye());

        let clicked = w
            .picker
            .borrow_mut()
            .resolve_click(ro, rd, field.pick_targets())
            .map(str::to_owned);

        if let Some(name) = clicked {
            match field.select_project(&name, elapsed) {
                Some(SelectionChange::Focused { index, title }) => {
                    log::info!("[click] focus project {} ({})", index, title);
                    if let Some(doc) = dom::window_document() {
                        captions::reveal(&doc, title);
                    }
                }
                Some(SelectionChange::Defocused { index, title }) => {
                    log::info!("[click] defocus project {} ({})", index, title);
                    if let Some(doc) = dom::window_document() {
                        captions::hide(&doc, title);
                    }
                }
                None => {
                    if dom::debug_enabled() {
                        log::info!("[click] {} ignored in current state", name);
                    }
                }
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
