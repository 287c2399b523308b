mod app_context;

pub use app_context::{AppContext, local_now};
