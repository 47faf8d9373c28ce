use log::{debug, error, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Fullscreen, Window},
};

use crate::controllers::interaction::{InputEvent, InteractionController};
use crate::controllers::render_loop::RenderLoop;
use crate::input::gui::app::pointer::{PointerTracker, scroll_delta_y};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Glue between winit, the interaction controller, the render loop and the
/// presenter.
///
/// Input events mutate the view immediately. At most one render request is
/// submitted per event-loop iteration, from `AboutToWait`, so a burst of
/// drag or scroll events costs a single render.
pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    interaction: InteractionController,
    render_loop: RenderLoop,
    pointer: PointerTracker,
    submit_pending: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        presenter: T,
        interaction: InteractionController,
        render_loop: RenderLoop,
    ) -> Self {
        Self {
            window,
            presenter,
            interaction,
            render_loop,
            pointer: PointerTracker::default(),
            submit_pending: true,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), GuiError> {
        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    self.window.request_redraw();
                }
                Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                    if self.handle_window_event(event) == Flow::Exit {
                        elwt.exit();
                    }
                }
                Event::AboutToWait => {
                    self.submit_render_request_if_needed();
                }
                Event::LoopExiting => {
                    info!("closing viewer");
                }
                _ => {}
            }
        })?;

        Ok(())
    }

    fn handle_window_event(&mut self, event: WindowEvent) -> Flow {
        match event {
            WindowEvent::CloseRequested => return Flow::Exit,
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.presenter.render() {
                    error!("render error: {err}");
                    return Flow::Exit;
                }
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.cursor_moved(position.x, position.y);
                self.apply(event);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.pointer.button(state, button) {
                    self.apply(event);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.apply(InputEvent::Scroll {
                    delta_y: scroll_delta_y(delta),
                });
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => return Flow::Exit,
                Key::Named(NamedKey::F11) => self.toggle_fullscreen(),
                _ => {}
            },
            _ => {}
        }

        Flow::Continue
    }

    fn apply(&mut self, event: InputEvent) {
        if self.interaction.handle_event(event).is_requested() {
            self.submit_pending = true;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.apply(InputEvent::Resize { width, height });

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.window.request_redraw();
    }

    fn toggle_fullscreen(&self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
        } else {
            self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }

    fn submit_render_request_if_needed(&mut self) {
        if !self.submit_pending {
            return;
        }
        self.submit_pending = false;

        if self.interaction.geometry().window_size().is_empty() {
            return;
        }

        let request = self.interaction.render_request();
        if self.render_loop.submit_if_changed(request).is_none() {
            debug!("view unchanged, skipping render");
        }
    }
}
