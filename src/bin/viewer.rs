use std::error::Error;

use log::error;
use mandelbrot_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), ViewerConfig::default());

    if let Err(err) = command.execute() {
        error!("{err}");
        return Err(err.into());
    }

    Ok(())
}
