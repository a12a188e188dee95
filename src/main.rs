//! Mobius entry point
//!
//! Web: renders the scene with WebGPU; a click or tap swaps circle and flame.
//! Native: prints a text preview of one crossfade.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use mobius::renderer::SdfRenderState;
    use mobius::{FrameUniforms, Settings, ShapeCrossfade};

    /// Demo instance holding all state
    struct Demo {
        uniforms: FrameUniforms,
        crossfade: ShapeCrossfade,
        render_state: Option<SdfRenderState>,
    }

    impl Demo {
        fn new(settings: &Settings, width: u32, height: u32) -> Self {
            let mut uniforms = FrameUniforms::new(1.0, settings.radius);
            uniforms.set_viewport(width, height);
            Self {
                uniforms,
                crossfade: ShapeCrossfade::from_settings(settings),
                render_state: None,
            }
        }

        fn swap_shape(&mut self) {
            self.crossfade.swap(&self.uniforms);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.uniforms.set_viewport(width, height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }

        /// Advance one frame and draw it
        fn frame(&mut self) {
            self.crossfade.advance(&mut self.uniforms);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.uniforms) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Size the canvas backing store to its CSS size times the pixel ratio
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mobius starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = fit_canvas(&canvas);

        let settings = Settings::load_or_init();
        let demo = Rc::new(RefCell::new(Demo::new(&settings, width, height)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = SdfRenderState::new(surface, &adapter, width, height).await;
        demo.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, demo.clone());
        setup_resize_handler(&canvas, demo.clone());

        request_animation_frame(demo);

        log::info!("Mobius running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, demo: Rc<RefCell<Demo>>) {
        // Mouse click
        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                demo.borrow_mut().swap_shape();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                demo.borrow_mut().swap_shape();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            demo.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            demo_loop(demo);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn demo_loop(demo: Rc<RefCell<Demo>>) {
        demo.borrow_mut().frame();
        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_demo::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mobius::preview::{preview_aspect, preview_ascii};
    use mobius::{FrameUniforms, Settings, ShapeCrossfade};

    env_logger::init();
    log::info!("Mobius (native) starting...");
    log::info!("Native mode prints a text preview - run with `trunk serve` for the WebGPU version");

    let settings = Settings::load_or_init();
    let (columns, rows) = (settings.preview_columns, settings.preview_rows);

    let mut uniforms = FrameUniforms::new(preview_aspect(columns, rows), settings.radius);
    let mut crossfade = ShapeCrossfade::from_settings(&settings);

    // Circle, then halfway through the crossfade, then the settled flame
    let fade_frames =
        (settings.animation_duration * settings.frames_per_second as f32).ceil() as usize;
    let snapshots = [fade_frames / 2, fade_frames + 1];

    println!(
        "t={:.2}s circle={:.2} fire={:.2}",
        uniforms.time, uniforms.circle_mul, uniforms.fire_mul
    );
    print!("{}", preview_ascii(&uniforms, columns, rows));

    crossfade.swap(&uniforms);
    let mut frame = 0;
    for target in snapshots {
        while frame < target {
            crossfade.advance(&mut uniforms);
            frame += 1;
        }
        println!(
            "t={:.2}s circle={:.2} fire={:.2}",
            uniforms.time, uniforms.circle_mul, uniforms.fire_mul
        );
        print!("{}", preview_ascii(&uniforms, columns, rows));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
