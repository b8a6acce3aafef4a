#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console in release

// Entry point is kept minimal: window config and app startup only.
// All logic lives in the app module (src/app.rs) and the deck widget (src/views/deck).

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod app;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Initialize in-app GUI logger (also mirrors to stderr)
    logger::init();

    // Settings for minimal input latency:
    // - renderer: Wgpu (faster and gives control over present mode)
    // - vsync: false (less latency; tearing is acceptable for a demo harness)
    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Expandable Cards",
        native_options,
        Box::new(|_cc| Box::new(app::DeckApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
