mod app_error;
mod locoroute_app;
mod operation;

pub use app_error::AppError;
pub use locoroute_app::LocorouteApp;
pub use operation::Operation;
