mod app;
mod controller;
mod screen;
mod util;

use anyhow::{Context, anyhow};
use clap::Parser;

use crate::controller::Controller;
use crate::screen::{InputParameters, Resolution};
use crate::util::{ParseFieldError, parse_field};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Projector-to-screen distance in meters.
    #[arg(
        long,
        default_value_t = InputParameters::default().distance,
        value_parser = parse_cli_number,
        allow_negative_numbers = true
    )]
    distance: f64,
    /// Projector light output.
    #[arg(
        long,
        default_value_t = InputParameters::default().lumens,
        value_parser = parse_cli_number,
        allow_negative_numbers = true
    )]
    lumens: f64,
    /// Panel resolution: WUXGA, FHD, UHD or 4K.
    #[arg(long, default_value_t = Resolution::default())]
    resolution: Resolution,
    #[arg(
        long,
        default_value_t = InputParameters::default().throw_ratio,
        value_parser = parse_cli_number,
        allow_negative_numbers = true
    )]
    throw_ratio: f64,
    /// Drag the projector handle this many pixels from the start of the track.
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    drag: Option<f32>,
    /// Print the computed results as JSON instead of opening a window.
    #[arg(long)]
    report: bool,
}

/// Command-line numbers pass the same boundary check as typed field input,
/// so NaN and infinities are refused before they reach the engine.
fn parse_cli_number(value: &str) -> Result<f64, ParseFieldError> {
    parse_field(value)
}

impl Args {
    fn controller(&self) -> Controller {
        let mut controller = Controller::new(InputParameters {
            distance: self.distance,
            lumens: self.lumens,
            resolution: self.resolution,
            throw_ratio: self.throw_ratio,
        });

        if let Some(offset) = self.drag {
            let mut session = controller.begin_drag(0.0);
            session.move_to(offset);
            log::debug!("scripted drag left the handle at {} px", session.position());
        }

        controller
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let controller = args.controller();

    if args.report {
        let report = serde_json::to_string_pretty(&controller.report())
            .context("failed to serialize report")?;
        println!("{report}");
        return Ok(());
    }

    log::info!(
        "starting with {} at {} m, throw ratio {}",
        controller.params().resolution.label(),
        controller.params().distance,
        controller.params().throw_ratio
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Projector-Screen Interface",
        options,
        Box::new(move |cc| Ok(Box::new(app::ProjectorScreenApp::new(cc, controller)))),
    )
    .map_err(|error| anyhow!("window terminated with an error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_input_defaults() {
        let args = Args::try_parse_from(["projector-screen"]).unwrap();
        let controller = args.controller();
        assert_eq!(*controller.params(), InputParameters::default());
        assert!(!args.report);
    }

    #[test]
    fn test_cli_parameters_and_drag() {
        let args = Args::try_parse_from([
            "projector-screen",
            "--resolution",
            "fhd",
            "--lumens",
            "4500",
            "--drag",
            "100",
            "--report",
        ])
        .unwrap();
        let controller = args.controller();

        assert_eq!(controller.params().resolution, Resolution::FHD);
        assert_eq!(controller.params().lumens, 4500.0);
        assert_eq!(controller.drag_position(), 100);
        assert_eq!(controller.params().distance, 5.5);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drag_that_never_leaves_track_start_keeps_distance() {
        let args = Args::try_parse_from(["projector-screen", "--drag", "-40"]).unwrap();
        let controller = args.controller();
        assert_eq!(controller.drag_position(), 0);
        assert_eq!(controller.params().distance, 5.0);
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        for (flag, value) in [
            ("--throw-ratio", "NaN"),
            ("--distance", "inf"),
            ("--lumens", "-inf"),
            ("--distance", "five"),
        ] {
            let result = Args::try_parse_from(["projector-screen", flag, value, "--report"]);
            assert!(result.is_err(), "{flag} {value} should be rejected");
        }
    }

    #[test]
    fn test_negative_and_zero_numbers_still_parse() {
        let args = Args::try_parse_from([
            "projector-screen",
            "--throw-ratio",
            "0",
            "--distance",
            "-2.5",
        ])
        .unwrap();
        assert_eq!(args.throw_ratio, 0.0);
        assert_eq!(args.distance, -2.5);

        let metrics = *args.controller().metrics();
        assert!(!metrics.lux.is_nan());
        assert_eq!(metrics, crate::screen::DerivedMetrics::default());
    }

    #[test]
    fn test_unknown_resolution_is_rejected() {
        assert!(Args::try_parse_from(["projector-screen", "--resolution", "8K"]).is_err());
    }
}
