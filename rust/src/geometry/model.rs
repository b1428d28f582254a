//! Point and rectangle value types

use crate::geometry::{Coordinate, GeometryError};
use crate::report::Coordinates;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// A 2D point
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coordinate> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A rectangle anchored at `origin`.
///
/// Holds its own copy of the origin, so building one never touches the
/// caller's point.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<T> {
    pub origin: Point<T>,
    pub width: T,
    pub height: T,
}

impl<T: Coordinate> Rectangle<T> {
    pub fn new(origin: Point<T>, width: T, height: T) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn area(&self) -> Result<T, GeometryError> {
        self.width
            .try_mul(self.height)
            .ok_or_else(|| GeometryError::overflow("area", '*', self.width, self.height))
    }

    /// `origin.x + width`. The name is kept even though this is the far x
    /// edge rather than a corner.
    pub fn top_right(&self) -> Result<T, GeometryError> {
        self.origin
            .x
            .try_add(self.width)
            .ok_or_else(|| GeometryError::overflow("top_right", '+', self.origin.x, self.width))
    }

    /// `origin.y + height`. Same naming caveat as `top_right`.
    pub fn bottom_left(&self) -> Result<T, GeometryError> {
        self.origin
            .y
            .try_add(self.height)
            .ok_or_else(|| GeometryError::overflow("bottom_left", '+', self.origin.y, self.height))
    }

    pub fn coordinates(&self) -> Result<Coordinates<T>, GeometryError> {
        Ok(Coordinates {
            start_x: self.origin.x,
            start_y: self.origin.y,
            top_right: self.top_right()?,
            bottom_left: self.bottom_left()?,
        })
    }

    /// Writes the four labelled coordinate lines.
    pub fn print_coordinates(&self, out: &mut dyn Write) -> Result<()> {
        let coords = self.coordinates()?;
        write!(out, "{}", coords)?;
        Ok(())
    }
}
