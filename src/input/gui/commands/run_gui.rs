use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::config::ViewerConfig;
use crate::controllers::interaction::InteractionController;
use crate::controllers::render_loop::RenderLoop;
use crate::core::data::pixel_size::PixelSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

const MIN_WINDOW_SIZE: f64 = 200.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until the viewer is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    f64::from(self.config.window_size.width),
                    f64::from(self.config.window_size.height),
                ))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE))
                .build(&event_loop)?,
        ));

        let inner_size = window.inner_size();
        info!(
            "opened window {}x{} (scale factor {})",
            inner_size.width,
            inner_size.height,
            window.scale_factor()
        );
        info!(
            "initial view centre ({}, {}) zoom {} with {} iterations",
            self.config.center.real, self.config.center.imag, self.config.zoom, self.config.max_iterations
        );

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let interaction =
            InteractionController::new(&self.config, PixelSize::new(inner_size.width, inner_size.height))?;
        let render_loop = RenderLoop::new(presenter.share_adapter())?;
        let app = GuiApp::new(window, presenter, interaction, render_loop);

        app.run(event_loop)
    }
}
