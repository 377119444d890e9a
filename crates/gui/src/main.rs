mod app;
mod canvas;
pub mod i18n;
mod ui;

// Re-export library modules so that `crate::state`, `crate::surface`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use crossline_lib::state;
pub use crossline_lib::surface;

use app::CrossLineApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crossline=info,crossline_lib=info".into()),
        )
        .init();

    // Parse --line-step <n> argument
    let line_step = parse_line_step_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("crossline")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "crossline",
        native_options,
        Box::new(move |cc| Ok(Box::new(CrossLineApp::new(cc, line_step)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_line_step_arg() -> Option<f64> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--line-step" && i + 1 < args.len() {
            let raw = &args[i + 1];
            match raw.parse::<f64>() {
                Ok(step) if step > 0.0 && step.is_finite() => {
                    tracing::info!("Collapse step from command line: {step}");
                    return Some(step);
                }
                _ => {
                    tracing::error!("Invalid --line-step value '{raw}', using settings");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
