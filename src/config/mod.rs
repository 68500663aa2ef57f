mod fonts;
mod model;
mod persistence;

pub(crate) use fonts::font_data;
pub(crate) use model::{AppConfig, WidgetSpec};
pub(crate) use persistence::load_config;
