//! Shape inputs: defaults, environment and command-line overrides

use crate::geometry::{Coordinate, Point, Rectangle};
use anyhow::{anyhow, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

pub const ENV_ORIGIN_X: &str = "RECT_ORIGIN_X";
pub const ENV_ORIGIN_Y: &str = "RECT_ORIGIN_Y";
pub const ENV_WIDTH: &str = "RECT_WIDTH";
pub const ENV_HEIGHT: &str = "RECT_HEIGHT";

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeConfig<T> {
    pub origin_x: T,
    pub origin_y: T,
    pub width: T,
    pub height: T,
}

impl<T: Coordinate> Default for ShapeConfig<T> {
    fn default() -> Self {
        Self {
            origin_x: T::from(50),
            origin_y: T::from(100),
            width: T::from(90),
            height: T::from(10),
        }
    }
}

impl<T> ShapeConfig<T>
where
    T: Coordinate + FromStr,
    T::Err: Display,
{
    /// Builds a config, taking each field from `lookup` when it yields a
    /// value and from the defaults otherwise.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            origin_x: field(&lookup, ENV_ORIGIN_X, defaults.origin_x)?,
            origin_y: field(&lookup, ENV_ORIGIN_Y, defaults.origin_y)?,
            width: field(&lookup, ENV_WIDTH, defaults.width)?,
            height: field(&lookup, ENV_HEIGHT, defaults.height)?,
        })
    }

    /// Resolves against the process environment after loading `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|_| None)
    }

    /// Like `from_env`, but `overrides` wins over the environment.
    pub fn from_env_with<F>(overrides: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::resolve(|key| overrides(key).or_else(|| env::var(key).ok()))
    }
}

impl<T: Coordinate> ShapeConfig<T> {
    pub fn build_rectangle(&self) -> Rectangle<T> {
        let origin = Point::new(self.origin_x, self.origin_y);
        Rectangle::new(origin, self.width, self.height)
    }
}

fn field<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw.trim();
            value
                .parse::<T>()
                .map_err(|e| anyhow!("Invalid value for {}: '{}' ({})", key, value, e))
        }
        None => Ok(default),
    }
}
