use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::SphereField;
use crate::render::{self, SphereInstance};

/// Everything the per-frame closure needs. One tick runs, in order:
/// sphere updates (which copy positions onto the pick proxies) then the
/// camera, then the draw — so picking and camera re-pinning always see
/// same-tick positions.
pub struct FrameContext<'a> {
    pub field: Rc<RefCell<SphereField>>,
    pub elapsed: Rc<RefCell<f32>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub start: Instant,
    pub last: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last).as_secs_f32();
        self.last = now;
        let elapsed = (now - self.start).as_secs_f32();
        *self.elapsed.borrow_mut() = elapsed;

        let mut field = self.field.borrow_mut();
        field.update(elapsed, dt_sec);

        if let Some(g) = &mut self.gpu {
            let instances: Vec<SphereInstance> = field
                .spheres
                .iter()
                .map(SphereInstance::from_sphere)
                .collect();
            g.set_camera(field.camera.eye());
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
