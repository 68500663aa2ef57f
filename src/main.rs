#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod config;
mod core;
mod gui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    gui::run()
}
