mod auto_run;
mod camera;
mod config;
mod session;

pub use auto_run::{AutoRun, FASTEST_INTERVAL, SLOWEST_INTERVAL};
pub use camera::Camera;
pub use config::Config;
pub use session::{PlayerState, Session};
