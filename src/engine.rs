use crate::color::Color;
use crate::config::Config;
use crate::error::InitError;
use crate::geo::{self, Point};
use crate::input::{ExitTrigger, Key, ModeChange, PaintMode};
use crate::map::{MapEvent, MapView};
use crate::render::{self, Surface};
use crate::session::Session;
use crate::store::Mark;
use crate::viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Paint mode changed. Carries the active swatch color, or `None` when idle.
    ModeChanged(Option<Color>),
    /// A mark was painted and stored.
    MarkAdded(Mark),
    /// The overlay was rebuilt from the store.
    Redrawn { marks: usize },
}

/// Annotation engine: one session bound to one map view and one overlay.
///
/// Generic over the map and surface so it runs in the browser against
/// Leaflet and a canvas, and natively against [`crate::MercatorMap`] and
/// [`crate::PixmapSurface`]. Every handler runs to completion and queries the
/// map for the viewport as of the call.
pub struct EngineCore<M, S> {
    session: Session,
    map: M,
    surface: S,
    mark_radius: f64,
}

impl<M: MapView, S: Surface> EngineCore<M, S> {
    /// Start an idle, empty session and fit the overlay to the map.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Config`] for an invalid config and
    /// [`InitError::MapUnavailable`] if the map is not ready.
    pub fn new(mut map: M, mut surface: S, config: &Config) -> Result<Self, InitError> {
        config.validate()?;
        if !map.is_ready() {
            return Err(InitError::MapUnavailable("map view is not initialized".into()));
        }

        map.set_dragging(true);
        viewport::on_resize(&map, &mut surface);

        let session = Session::new();
        tracing::info!(session = %session.id(), radius = config.mark_radius_px, "annotation engine started");
        Ok(Self { session, map, surface, mark_radius: config.mark_radius_px })
    }

    /// Build the overlay, then the map, then start the engine.
    ///
    /// The overlay resolves first: when it is missing, `map` is never called
    /// and the map component is left untouched.
    ///
    /// # Errors
    ///
    /// The first error from config validation, either factory, or
    /// [`EngineCore::new`].
    pub fn assemble(
        config: &Config,
        surface: impl FnOnce(&Config) -> Result<S, InitError>,
        map: impl FnOnce(&Config) -> Result<M, InitError>,
    ) -> Result<Self, InitError> {
        config.validate()?;
        let surface = surface(config)?;
        let map = map(config)?;
        Self::new(map, surface, config)
    }

    // --- Mode intents ---

    /// A color swatch was clicked.
    pub fn select_color(&mut self, color: Color) -> Vec<Action> {
        match self.session.mode.select(color) {
            ModeChange::Painting(color) => {
                tracing::info!(session = %self.session.id(), %color, "painting mode enabled");
                self.sync_dragging();
                vec![Action::ModeChanged(Some(color))]
            }
            ModeChange::Idle => self.exited(ExitTrigger::Deselect),
        }
    }

    /// The host deselected the active swatch.
    pub fn deselect_color(&mut self) -> Vec<Action> {
        self.exit(ExitTrigger::Deselect)
    }

    /// The explicit "exit painting mode" command.
    pub fn exit_paint_mode(&mut self) -> Vec<Action> {
        self.exit(ExitTrigger::ExitCommand)
    }

    /// The escape key was pressed.
    pub fn handle_escape(&mut self) -> Vec<Action> {
        self.exit(ExitTrigger::Escape)
    }

    /// Route a key press; only escape is meaningful.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() {
            self.handle_escape()
        } else {
            Vec::new()
        }
    }

    // --- Pointer input ---

    /// Pointer pressed on the overlay. Starts a stroke; nothing is painted
    /// until the pointer moves.
    ///
    /// Ignored while idle: the event belongs to the map.
    pub fn on_pointer_down(&mut self, pixel: Point) -> Vec<Action> {
        if let Some(color) = self.session.mode.press() {
            tracing::debug!(x = pixel.x, y = pixel.y, %color, "stroke started");
        }
        Vec::new()
    }

    /// Pointer moved over the overlay. Paints a mark while a stroke is in progress.
    pub fn on_pointer_move(&mut self, pixel: Point) -> Vec<Action> {
        let Some(color) = self.session.mode.stroke_color().cloned() else {
            return Vec::new();
        };
        vec![self.sample(pixel, color)]
    }

    /// Pointer released. Ends the stroke; nothing is painted.
    pub fn on_pointer_up(&mut self, pixel: Point) -> Vec<Action> {
        if self.session.mode.release() {
            tracing::debug!(x = pixel.x, y = pixel.y, marks = self.session.marks.len(), "stroke ended");
        }
        Vec::new()
    }

    // --- Viewport ---

    /// React to a viewport change reported by the map.
    ///
    /// Every change ends in a full redraw: a resize discards the overlay's
    /// pixels, and a pan or zoom moves where stored locations project.
    pub fn on_map_event(&mut self, event: MapEvent) -> Vec<Action> {
        match event {
            MapEvent::Resize => viewport::on_resize(&self.map, &mut self.surface),
            MapEvent::Move | MapEvent::Zoom => viewport::reposition(&self.map, &mut self.surface),
        }
        let marks = self.redraw();
        vec![Action::Redrawn { marks }]
    }

    /// Rebuild the overlay from the store. Returns the number of marks drawn.
    pub fn redraw(&mut self) -> usize {
        render::redraw(&mut self.surface, &self.map, &self.session.marks, self.mark_radius)
    }

    // --- Queries ---

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Stored marks in paint order.
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        self.session.marks.all()
    }

    #[must_use]
    pub fn mode(&self) -> &PaintMode {
        &self.session.mode
    }

    #[must_use]
    pub fn active_color(&self) -> Option<&Color> {
        self.session.active_color()
    }

    /// Whether the map currently owns pointer drags.
    #[must_use]
    pub fn dragging_enabled(&self) -> bool {
        self.session.mode.dragging_enabled()
    }

    #[must_use]
    pub fn mark_radius(&self) -> f64 {
        self.mark_radius
    }

    #[must_use]
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Mutable access for hosts that drive the map through the engine.
    /// Follow any view change with [`EngineCore::on_map_event`].
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // --- Internals ---

    fn exit(&mut self, trigger: ExitTrigger) -> Vec<Action> {
        if self.session.mode.exit() {
            self.exited(trigger)
        } else {
            Vec::new()
        }
    }

    fn exited(&mut self, trigger: ExitTrigger) -> Vec<Action> {
        tracing::info!(session = %self.session.id(), ?trigger, "painting mode disabled");
        self.sync_dragging();
        vec![Action::ModeChanged(None)]
    }

    fn sync_dragging(&mut self) {
        self.map.set_dragging(self.session.mode.dragging_enabled());
    }

    /// Paint at `pixel` in `color`, then store the mark at the pixel's current location.
    fn sample(&mut self, pixel: Point, color: Color) -> Action {
        render::paint_mark(&mut self.surface, pixel, self.mark_radius, &color);
        let location = geo::pixel_to_geo(&self.map, pixel);
        tracing::trace!(x = pixel.x, y = pixel.y, lat = location.lat, lng = location.lng, "mark painted");
        let mark = Mark::new(color, location);
        self.session.marks.append(mark.clone());
        Action::MarkAdded(mark)
    }
}
