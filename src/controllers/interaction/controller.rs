use log::{debug, trace};

use crate::config::ViewerConfig;
use crate::controllers::interaction::events::{InputEvent, Redraw};
use crate::controllers::interaction::session::DragSession;
use crate::controllers::render_loop::data::render_request::RenderRequest;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::PixelPosition;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::view::resolution::ViewportGeometry;
use crate::core::view::transform::ViewTransform;

/// Owns the view state and turns input events into view mutations.
///
/// Events are applied one at a time in arrival order. Renders read the state
/// only through [`InteractionController::render_request`], which copies it.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    view: ViewState,
    session: DragSession,
    geometry: ViewportGeometry,
    zoom_step: f64,
    max_render_dimension: u32,
}

impl InteractionController {
    pub fn new(config: &ViewerConfig, window_size: PixelSize) -> Result<Self, ViewStateError> {
        config.validate()?;
        let view = config.initial_view()?;

        Ok(Self {
            view,
            session: DragSession::default(),
            geometry: ViewportGeometry::new(window_size, view.zoom(), config.max_render_dimension),
            zoom_step: config.zoom_step,
            max_render_dimension: config.max_render_dimension,
        })
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    #[must_use]
    pub fn session(&self) -> DragSession {
        self.session
    }

    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            view: self.view,
            render_size: self.geometry.render_size(),
        }
    }

    /// Plane point under a window position for the current view.
    #[must_use]
    pub fn pixel_to_complex(&self, position: PixelPosition) -> Complex {
        ViewTransform::new(&self.view, self.geometry.window_size()).pixel_to_complex(position)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Redraw {
        trace!("input event {:?}", event);

        match event {
            InputEvent::PointerPress(position) => {
                self.session.begin(position);
                Redraw::Skip
            }
            InputEvent::PointerMove(position) => self.drag_to(position),
            InputEvent::PointerRelease(_) => {
                self.session.end();
                Redraw::Skip
            }
            InputEvent::Scroll { delta_y } => self.scroll(delta_y),
            InputEvent::Resize { width, height } => {
                self.resize(PixelSize::new(width, height));
                Redraw::Request
            }
        }
    }

    fn drag_to(&mut self, position: PixelPosition) -> Redraw {
        let window_size = self.geometry.window_size();

        if window_size.is_empty() {
            return Redraw::Skip;
        }

        let Some(anchor) = self.session.advance(position) else {
            return Redraw::Skip;
        };

        let zoom = self.view.zoom();
        let dx = (position.x - anchor.x) / window_size.width as f64 / zoom;
        let dy = (position.y - anchor.y) / window_size.height as f64 / zoom;

        // Grab-and-pull: the plane follows the pointer, so the centre moves
        // the opposite way horizontally. Plane Y is up, screen Y is down.
        self.view.pan_by(Complex {
            real: -dx,
            imag: dy,
        });

        Redraw::Request
    }

    fn scroll(&mut self, delta_y: f64) -> Redraw {
        // Anything that is not a forward scroll zooms out, including a wheel
        // event with no vertical component.
        let factor = if delta_y > 0.0 {
            self.zoom_step
        } else {
            1.0 / self.zoom_step
        };

        let previous_zoom = self.view.zoom();
        if self.view.zoom_by(factor).is_err() || self.view.zoom() == previous_zoom {
            return Redraw::Skip;
        }

        self.refresh_geometry(self.geometry.window_size());
        debug!(
            "zoom {:.6} render size {}x{}",
            self.view.zoom(),
            self.geometry.render_size().width,
            self.geometry.render_size().height
        );

        Redraw::Request
    }

    fn resize(&mut self, window_size: PixelSize) {
        self.refresh_geometry(window_size);
        debug!(
            "window resized to {}x{}, render size {}x{}",
            window_size.width,
            window_size.height,
            self.geometry.render_size().width,
            self.geometry.render_size().height
        );
    }

    fn refresh_geometry(&mut self, window_size: PixelSize) {
        self.geometry =
            ViewportGeometry::new(window_size, self.view.zoom(), self.max_render_dimension);
    }
}
