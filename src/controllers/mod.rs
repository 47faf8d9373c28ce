pub mod interaction;
pub mod render_loop;
