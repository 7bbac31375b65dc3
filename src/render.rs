//! Simulation frame rendering
//!
//! Draws the two-segment arm, the cube, and the target into a fixed square
//! viewport and returns the frame as a base64-encoded PNG blob. Exactly one
//! frame is produced per simulation run; any drawing or encoding failure
//! aborts the whole simulation call.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;

use crate::error::{Result, RosCheckError};
use crate::schema::JointState;
use crate::sim::ARM_LINK_LENGTH;

const FRAME_WIDTH: u32 = 600;
const FRAME_HEIGHT: u32 = 600;

/// Viewport bounds, both axes
const VIEW_MIN: f64 = -0.5;
const VIEW_MAX: f64 = 1.0;

fn draw_error(e: impl std::fmt::Display) -> RosCheckError {
    RosCheckError::RenderFailure {
        message: e.to_string(),
    }
}

/// Render one frame: arm segments, cube marker, target marker
pub fn render_frame(
    joints: &JointState,
    cube_position: [f64; 3],
    target_position: [f64; 3],
) -> Result<String> {
    let mut rgb_buffer = vec![0u8; (FRAME_WIDTH * FRAME_HEIGHT * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut rgb_buffer, (FRAME_WIDTH, FRAME_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(20)
            .y_label_area_size(20)
            .build_cartesian_2d(VIEW_MIN..VIEW_MAX, VIEW_MIN..VIEW_MAX)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(draw_error)?;

        // Two-segment arm anchored at the origin, angles joint1 and joint1+joint2
        let elbow = (
            ARM_LINK_LENGTH * joints.joint1.cos(),
            ARM_LINK_LENGTH * joints.joint1.sin(),
        );
        let wrist = (
            elbow.0 + ARM_LINK_LENGTH * (joints.joint1 + joints.joint2).cos(),
            elbow.1 + ARM_LINK_LENGTH * (joints.joint1 + joints.joint2).sin(),
        );
        let arm = [(0.0, 0.0), elbow, wrist];

        chart
            .draw_series(LineSeries::new(arm, BLUE.stroke_width(3)))
            .map_err(draw_error)?;
        chart
            .draw_series(arm.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))
            .map_err(draw_error)?;

        // Cube as a filled square in data coordinates
        let half = 0.02;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [
                    (cube_position[0] - half, cube_position[1] - half),
                    (cube_position[0] + half, cube_position[1] + half),
                ],
                GREEN.filled(),
            )))
            .map_err(draw_error)?;

        // Target as a cross
        chart
            .draw_series(std::iter::once(Cross::new(
                (target_position[0], target_position[1]),
                6,
                RED.stroke_width(2),
            )))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }

    let mut png_bytes = Vec::new();
    PngEncoder::new(&mut png_bytes)
        .write_image(&rgb_buffer, FRAME_WIDTH, FRAME_HEIGHT, ExtendedColorType::Rgb8)
        .map_err(draw_error)?;

    Ok(STANDARD.encode(png_bytes))
}
