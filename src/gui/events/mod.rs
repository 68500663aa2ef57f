mod mouse;
mod redraw;
