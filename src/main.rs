#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 900.0])
            .with_min_inner_size([300.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Drawing Pad",
        native_options,
        Box::new(|cc| Ok(Box::new(drawing_pad::DemoApp::new(cc)))),
    )
}

// The demo only runs natively; the library itself works on the web.
#[cfg(target_arch = "wasm32")]
fn main() {}
