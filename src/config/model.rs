use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::ResizableSides;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub window: WindowConfig,
    pub resize: ResizeConfig,
    pub font: FontConfig,
    pub demo: DemoConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Clear color as 0xRRGGBB.
    pub background: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Resizable widgets".to_string(),
            width: 800,
            height: 600,
            background: 0x666666,
        }
    }
}

/// Defaults shared by every resizable widget, in centimetres.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ResizeConfig {
    pub border_cm: f64,
    pub indicator_size_cm: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            border_cm: 0.5,
            indicator_size_cm: 0.6,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct FontConfig {
    /// Explicit TTF/OTF file; system locations are searched when unset.
    pub path: Option<PathBuf>,
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: 15.0,
        }
    }
}

/// One resizable widget of the demo scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WidgetSpec {
    pub width_cm: f64,
    pub height_cm: f64,
    pub sides: ResizableSides,
    pub dont_move: bool,
    /// Overrides `resize.border_cm` for this widget.
    pub border_cm: Option<f64>,
}

impl Default for WidgetSpec {
    fn default() -> Self {
        Self {
            width_cm: 2.0,
            height_cm: 2.0,
            sides: ResizableSides::NONE,
            dont_move: false,
            border_cm: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DemoConfig {
    /// Full-height sidebar; only `width_cm` applies.
    pub sidebar: WidgetSpec,
    /// First row of the sidebar; spans the sidebar width.
    pub side_label: WidgetSpec,
    /// Button placed in the content stack next to the sidebar.
    pub stack_button: WidgetSpec,
    /// Button floating over the layout at the window origin.
    pub floating_button: WidgetSpec,
    pub filler_labels: usize,
    pub filler_label_height_cm: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sidebar: WidgetSpec {
                width_cm: 3.0,
                height_cm: 0.0,
                sides: ResizableSides::parse("r"),
                dont_move: false,
                border_cm: None,
            },
            side_label: WidgetSpec {
                width_cm: 0.0,
                height_cm: 1.0,
                sides: ResizableSides::parse("d"),
                dont_move: false,
                border_cm: None,
            },
            stack_button: WidgetSpec {
                width_cm: 4.0,
                height_cm: 4.0,
                sides: ResizableSides::parse("rd"),
                dont_move: false,
                border_cm: None,
            },
            floating_button: WidgetSpec {
                width_cm: 2.0,
                height_cm: 2.0,
                sides: ResizableSides::parse("rdlu"),
                dont_move: false,
                border_cm: None,
            },
            filler_labels: 9,
            filler_label_height_cm: 1.0,
        }
    }
}
