//! Browser binding: a Leaflet map, the overlay `<canvas>`, and the engine
//! exported to JavaScript.
//!
//! [`Engine::attach`] creates the Leaflet map inside the configured container,
//! adds the tile layer, wraps the overlay canvas and wires map viewport events
//! and canvas mouse events into an [`EngineCore`]. Swatch buttons, the exit
//! button and keyboard listening stay in the host page, which calls the
//! exported intent methods.
//!
//! This module is the only place that touches `wasm_bindgen`, `js_sys` or
//! `web_sys`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::color::Color;
use crate::config::Config;
use crate::engine::EngineCore;
use crate::error::InitError;
use crate::geo::{LatLng, Point, Size};
use crate::input::Key;
use crate::map::{MapEvent, MapView};
use crate::render::Surface;

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

#[wasm_bindgen]
extern "C" {
    /// Leaflet's `L.Map`.
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    type JsMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn js_new_map(id: &str, options: &JsValue) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &JsMap, center: &Array, zoom: f64) -> JsMap;

    #[wasm_bindgen(method, js_name = getSize)]
    fn get_size(this: &JsMap) -> JsPoint;

    #[wasm_bindgen(method, js_name = containerPointToLayerPoint)]
    fn container_point_to_layer_point(this: &JsMap, point: &Array) -> JsPoint;

    #[wasm_bindgen(method, js_name = containerPointToLatLng)]
    fn container_point_to_lat_lng(this: &JsMap, point: &Array) -> JsLatLng;

    #[wasm_bindgen(method, js_name = latLngToContainerPoint)]
    fn lat_lng_to_container_point(this: &JsMap, lat_lng: &Array) -> JsPoint;

    #[wasm_bindgen(method)]
    fn on(this: &JsMap, event: &str, handler: &js_sys::Function) -> JsMap;

    #[wasm_bindgen(method, getter)]
    fn dragging(this: &JsMap) -> JsHandler;

    /// A Leaflet interaction handler such as `map.dragging`.
    type JsHandler;

    #[wasm_bindgen(method)]
    fn enable(this: &JsHandler);

    #[wasm_bindgen(method)]
    fn disable(this: &JsHandler);

    /// `L.Point`.
    type JsPoint;

    #[wasm_bindgen(method, getter)]
    fn x(this: &JsPoint) -> f64;

    #[wasm_bindgen(method, getter)]
    fn y(this: &JsPoint) -> f64;

    /// `L.LatLng`.
    type JsLatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &JsLatLng) -> f64;

    /// `L.TileLayer`.
    type JsTileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn js_tile_layer(url: &str, options: &JsValue) -> JsTileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &JsTileLayer, map: &JsMap) -> JsTileLayer;
}

// =============================================================
// Map
// =============================================================

/// [`MapView`] over a live Leaflet map.
pub struct LeafletMap {
    inner: JsMap,
}

impl LeafletMap {
    /// Create the map in `config.map_container_id`, set the initial view and add tiles.
    ///
    /// # Errors
    ///
    /// [`InitError::MapUnavailable`] when the Leaflet global `L` is missing,
    /// [`InitError::ElementNotFound`] when the container does not exist,
    /// [`InitError::Js`] when Leaflet rejects the container.
    pub fn create(config: &Config) -> Result<Self, InitError> {
        if !Reflect::has(&js_sys::global(), &JsValue::from_str("L")).map_err(js_error)? {
            return Err(InitError::MapUnavailable(
                "Leaflet is not loaded; include leaflet.js before this module".into(),
            ));
        }
        find_element(&config.map_container_id)?;

        let options = js_object(&[("zoomControl", JsValue::TRUE), ("dragging", JsValue::TRUE)])?;
        let inner = js_new_map(&config.map_container_id, &options).map_err(js_error)?;
        inner.set_view(&lat_lng_array(config.initial_center), config.initial_zoom);

        let tile_options = js_object(&[
            ("maxZoom", JsValue::from(config.max_zoom)),
            ("attribution", JsValue::from_str(&config.tile_attribution)),
        ])?;
        js_tile_layer(&config.tile_url, &tile_options).add_to(&inner);

        Ok(Self { inner })
    }

    fn subscribe(&self, event: &str, handler: &Closure<dyn FnMut()>) {
        self.inner.on(event, handler.as_ref().unchecked_ref());
    }
}

impl MapView for LeafletMap {
    fn viewport_size(&self) -> Size {
        let size = self.inner.get_size();
        Size::new(size.x(), size.y())
    }

    fn container_point_to_layer_point(&self, point: Point) -> Point {
        from_js_point(&self.inner.container_point_to_layer_point(&point_array(point)))
    }

    fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        let ll = self.inner.container_point_to_lat_lng(&point_array(point));
        LatLng::new(ll.lat(), ll.lng())
    }

    fn lat_lng_to_container_point(&self, location: LatLng) -> Point {
        from_js_point(&self.inner.lat_lng_to_container_point(&lat_lng_array(location)))
    }

    fn set_dragging(&mut self, enabled: bool) {
        let handler = self.inner.dragging();
        if enabled {
            handler.enable();
        } else {
            handler.disable();
        }
    }
}

// =============================================================
// Overlay canvas
// =============================================================

/// [`Surface`] over the overlay `<canvas>` element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap `canvas`, stack it at `z_index` above the map and let it receive mouse events.
    ///
    /// # Errors
    ///
    /// [`InitError::Context`] when the canvas has no 2D context,
    /// [`InitError::Js`] when its style cannot be set.
    pub fn new(canvas: HtmlCanvasElement, z_index: i32) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| InitError::Context("getContext(\"2d\") returned null".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| InitError::Context("context is not a CanvasRenderingContext2d".into()))?;

        let style = canvas.style();
        style.set_property("z-index", &z_index.to_string()).map_err(js_error)?;
        style.set_property("pointer-events", "auto").map_err(js_error)?;

        Ok(Self { canvas, ctx })
    }

    /// Look the canvas up by element id.
    ///
    /// # Errors
    ///
    /// [`InitError::ElementNotFound`] when no such `<canvas>` exists, plus
    /// anything [`CanvasSurface::new`] returns.
    pub fn from_element_id(id: &str, z_index: i32) -> Result<Self, InitError> {
        let canvas = find_element(id)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| InitError::ElementNotFound(format!("{id} (not a <canvas>)")))?;
        Self::new(canvas, z_index)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, size: Size) {
        self.canvas.set_width(size.width.max(0.0).round() as u32);
        self.canvas.set_height(size.height.max(0.0).round() as u32);
    }

    fn set_position(&mut self, offset: Point) {
        let transform = format!("translate3d({}px, {}px, 0px)", offset.x, offset.y);
        if let Err(e) = self.canvas.style().set_property("transform", &transform) {
            tracing::warn!(error = ?e, "failed to position overlay");
        }
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color) {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI) {
            tracing::warn!(error = ?e, "failed to trace mark");
            return;
        }
        self.ctx.fill();
    }
}

// =============================================================
// Exported engine
// =============================================================

type SharedCore = Rc<RefCell<EngineCore<LeafletMap, CanvasSurface>>>;

/// The annotation engine as seen from JavaScript.
///
/// Keep the returned object alive for as long as the map is on screen: it
/// owns the event listeners.
#[wasm_bindgen]
pub struct Engine {
    core: SharedCore,
    _map_listeners: Vec<Closure<dyn FnMut()>>,
    _mouse_listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

#[wasm_bindgen]
impl Engine {
    /// Create map, overlay and engine from a JSON config (`"{}"` for defaults).
    ///
    /// # Errors
    ///
    /// Fails without retrying when the config is invalid, Leaflet is not
    /// loaded, or the container or canvas element is missing.
    pub fn attach(config_json: &str) -> Result<Engine, JsError> {
        let config = Config::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?;
        Self::attach_with(&config).map_err(|e| JsError::new(&e.to_string()))
    }

    /// A swatch was clicked. Returns the active color afterwards, if any.
    #[wasm_bindgen(js_name = selectColor)]
    pub fn select_color(&self, color: &str) -> Option<String> {
        self.with_core(|core| {
            core.select_color(Color::new(color));
        })
    }

    #[wasm_bindgen(js_name = deselectColor)]
    pub fn deselect_color(&self) -> Option<String> {
        self.with_core(|core| {
            core.deselect_color();
        })
    }

    #[wasm_bindgen(js_name = exitPaintMode)]
    pub fn exit_paint_mode(&self) -> Option<String> {
        self.with_core(|core| {
            core.exit_paint_mode();
        })
    }

    #[wasm_bindgen(js_name = handleEscape)]
    pub fn handle_escape(&self) -> Option<String> {
        self.with_core(|core| {
            core.handle_escape();
        })
    }

    /// Forward a `keydown` key name (`KeyboardEvent.key`).
    #[wasm_bindgen(js_name = onKeyDown)]
    pub fn on_key_down(&self, key: &str) -> Option<String> {
        self.with_core(|core| {
            core.on_key_down(&Key(key.to_owned()));
        })
    }

    /// The active swatch color, if painting.
    #[wasm_bindgen(js_name = activeColor)]
    pub fn active_color(&self) -> Option<String> {
        self.with_core(|_| {})
    }

    /// Number of stored marks.
    #[wasm_bindgen(js_name = markCount)]
    pub fn mark_count(&self) -> usize {
        self.core.try_borrow().map_or(0, |core| core.marks().len())
    }
}

impl Engine {
    /// Build everything from a config. The overlay canvas is looked up before
    /// the map is created, so a failed attach leaves the container untouched.
    ///
    /// # Errors
    ///
    /// See [`Engine::attach`].
    pub fn attach_with(config: &Config) -> Result<Engine, InitError> {
        let core = EngineCore::assemble(
            config,
            |c| CanvasSurface::from_element_id(&c.overlay_canvas_id, c.overlay_z_index),
            LeafletMap::create,
        )?;
        let canvas = core.surface().canvas.clone();
        let core: SharedCore = Rc::new(RefCell::new(core));

        let mut map_listeners = Vec::new();
        for (name, event) in [("resize", MapEvent::Resize), ("move", MapEvent::Move), ("zoom", MapEvent::Zoom)] {
            let core_for_cb = Rc::clone(&core);
            let cb = Closure::<dyn FnMut()>::new(move || {
                with_core_mut(&core_for_cb, |core| {
                    core.on_map_event(event);
                });
            });
            core.borrow().map().subscribe(name, &cb);
            map_listeners.push(cb);
        }

        let mut mouse_listeners = Vec::new();
        for name in ["mousedown", "mousemove", "mouseup"] {
            let core_for_cb = Rc::clone(&core);
            let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                let pixel = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                with_core_mut(&core_for_cb, |core| {
                    match name {
                        "mousedown" => core.on_pointer_down(pixel),
                        "mousemove" => core.on_pointer_move(pixel),
                        _ => core.on_pointer_up(pixel),
                    };
                });
            });
            canvas
                .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                .map_err(js_error)?;
            mouse_listeners.push(cb);
        }

        tracing::info!(container = %config.map_container_id, overlay = %config.overlay_canvas_id, "engine attached");
        Ok(Engine { core, _map_listeners: map_listeners, _mouse_listeners: mouse_listeners })
    }

    /// Run `f` against the core, then report the active color.
    fn with_core(&self, f: impl FnOnce(&mut EngineCore<LeafletMap, CanvasSurface>)) -> Option<String> {
        with_core_mut(&self.core, |core| {
            f(core);
            core.active_color().map(|c| c.as_str().to_owned())
        })
        .flatten()
    }
}

/// Borrow the shared core for one handler. A re-entrant event (fired by the
/// map while a handler is still running) is dropped with a warning.
fn with_core_mut<T>(
    core: &SharedCore,
    f: impl FnOnce(&mut EngineCore<LeafletMap, CanvasSurface>) -> T,
) -> Option<T> {
    match core.try_borrow_mut() {
        Ok(mut core) => Some(f(&mut core)),
        Err(_) => {
            tracing::warn!("engine busy; re-entrant event dropped");
            None
        }
    }
}

// =============================================================
// DOM / JS value helpers
// =============================================================

fn find_element(id: &str) -> Result<web_sys::Element, InitError> {
    let found = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id));
    require_element(id, found)
}

fn require_element<T>(id: &str, found: Option<T>) -> Result<T, InitError> {
    found.ok_or_else(|| InitError::ElementNotFound(id.to_owned()))
}

fn js_error(value: JsValue) -> InitError {
    InitError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn js_object(entries: &[(&str, JsValue)]) -> Result<JsValue, InitError> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value).map_err(js_error)?;
    }
    Ok(obj.into())
}

fn point_array(point: Point) -> Array {
    Array::of2(&JsValue::from(point.x), &JsValue::from(point.y))
}

fn lat_lng_array(location: LatLng) -> Array {
    Array::of2(&JsValue::from(location.lat), &JsValue::from(location.lng))
}

fn from_js_point(point: &JsPoint) -> Point {
    Point::new(point.x(), point.y())
}
