//! Text and JSON rendering of a rectangle

use crate::geometry::{Coordinate, Point, Rectangle};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::{BufWriter, Write};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Area followed by the four coordinate lines
    #[default]
    Text,
    /// A single JSON object per run
    Json,
}

/// The four values `print_coordinates` emits, in print order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates<T> {
    pub start_x: T,
    pub start_y: T,
    pub top_right: T,
    pub bottom_left: T,
}

impl<T: Coordinate> fmt::Display for Coordinates<T> {
    // Label punctuation is part of the output contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Starting Point (X)): {}", self.start_x)?;
        writeln!(f, "Starting Point (Y)): {}", self.start_y)?;
        writeln!(f, "End Point X-Axis (Top Right): {}", self.top_right)?;
        writeln!(f, "End Point Y-Axis (Bottom Left): {}", self.bottom_left)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct RectangleReport<T> {
    pub origin: Point<T>,
    pub width: T,
    pub height: T,
    pub area: T,
    pub coordinates: Coordinates<T>,
}

impl<T: Coordinate> RectangleReport<T> {
    pub fn from_rectangle(rect: &Rectangle<T>) -> Result<Self> {
        Ok(Self {
            origin: rect.origin,
            width: rect.width,
            height: rect.height,
            area: rect.area().context("Failed to compute area")?,
            coordinates: rect
                .coordinates()
                .context("Failed to compute coordinates")?,
        })
    }
}

pub fn write_report<T: Coordinate>(
    rect: &Rectangle<T>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let report = RectangleReport::from_rectangle(rect)?;
    let mut buf = BufWriter::new(out);
    match format {
        OutputFormat::Text => {
            writeln!(buf, "{}", report.area)?;
            write!(buf, "{}", report.coordinates)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut buf, &report)?;
            buf.write_all(b"\n")?;
        }
    }
    buf.flush()?;
    Ok(())
}
