//! Splits a row's width and height among a fixed number of cells.
use rand::RngExt;
use thiserror::Error;

use super::Size;

/// How one axis of a row is shared between its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSizing {
    /// Every cell gets `total / columns`; the last one takes what is left.
    Uniform,
    /// Every cell gets a random size of at least `min`, bounded so the
    /// remaining cells can still reach `min`. The last one takes what is left.
    Random { min: u16 },
    /// Every cell spans the whole total. Nothing is consumed.
    Stretch,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid row configuration: {0}")]
    InvalidConfiguration(String),
    #[error("all {columns} cells of the row have already been sized")]
    Exhausted { columns: u16 },
}

/// Geometry of a single row and the sizing rule of each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowConfig {
    pub columns: u16,
    pub row_width: u16,
    pub row_height: u16,
    pub width: AxisSizing,
    pub height: AxisSizing,
}

impl RowConfig {
    /// Builds a config from per-axis "uniform" flags. A non-uniform axis is
    /// randomized with the given minimum; the minimum of a uniform axis is unused.
    pub fn new(
        columns: u16,
        row_width: u16,
        row_height: u16,
        uniform_width: bool,
        uniform_height: bool,
        min_width: u16,
        min_height: u16,
    ) -> Self {
        let sizing = |uniform: bool, min: u16| {
            if uniform {
                AxisSizing::Uniform
            } else {
                AxisSizing::Random { min }
            }
        };
        Self {
            columns,
            row_width,
            row_height,
            width: sizing(uniform_width, min_width),
            height: sizing(uniform_height, min_height),
        }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.columns == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "a row must hold at least one cell".to_string(),
            ));
        }
        check_axis("width", self.row_width, self.width, self.columns)?;
        check_axis("height", self.row_height, self.height, self.columns)
    }
}

fn check_axis(name: &str, total: u16, sizing: AxisSizing, columns: u16) -> Result<(), GeneratorError> {
    let AxisSizing::Random { min } = sizing else {
        return Ok(());
    };
    let needed = u32::from(columns) * u32::from(min);
    if u32::from(total) < needed {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "row {name} {total} cannot hold {columns} cells with minimum {name} {min}"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug)]
struct AxisBudget {
    total: u16,
    sizing: AxisSizing,
    left: u16,
}

impl AxisBudget {
    fn new(total: u16, sizing: AxisSizing) -> Self {
        Self {
            total,
            sizing,
            left: total,
        }
    }

    fn next<R: RngExt>(&mut self, columns: u16, cells_left: u16, rng: &mut R) -> u16 {
        let value = if cells_left == 1 {
            self.left
        } else {
            match self.sizing {
                AxisSizing::Uniform => self.total / columns,
                AxisSizing::Stretch => self.total,
                AxisSizing::Random { min } => {
                    // validate() and the previous draws keep left >= cells_left * min
                    let max = self.left - (cells_left - 1) * min;
                    rng.random_range(min..=max)
                }
            }
        };
        if self.sizing != AxisSizing::Stretch {
            self.left -= value;
        }
        value
    }

    fn reset(&mut self) {
        self.left = self.total;
    }
}

/// Countdown over the cells of one row.
///
/// Call [`next_size`](Self::next_size) once per cell until [`has_next`](Self::has_next)
/// turns false, then [`reset`](Self::reset) before laying out the next row. On every
/// non-stretched axis the sizes of a full cycle add up to the row total exactly.
#[derive(Debug)]
pub struct ColumnSizeGenerator<R> {
    columns: u16,
    cells_left: u16,
    width: AxisBudget,
    height: AxisBudget,
    rng: R,
}

impl<R: RngExt> ColumnSizeGenerator<R> {
    pub fn new(config: RowConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;
        tracing::debug!(?config, "column size generator created");
        Ok(Self {
            columns: config.columns,
            cells_left: config.columns,
            width: AxisBudget::new(config.row_width, config.width),
            height: AxisBudget::new(config.row_height, config.height),
            rng,
        })
    }

    pub fn has_next(&self) -> bool {
        self.cells_left > 0
    }

    pub fn next_size(&mut self) -> Result<Size, GeneratorError> {
        if !self.has_next() {
            return Err(GeneratorError::Exhausted {
                columns: self.columns,
            });
        }
        let width = self.width.next(self.columns, self.cells_left, &mut self.rng);
        let height = self.height.next(self.columns, self.cells_left, &mut self.rng);
        self.cells_left -= 1;
        tracing::trace!(
            width,
            height,
            cells_left = self.remaining_cells(),
            width_left = self.remaining_width(),
            height_left = self.remaining_height(),
            "cell sized"
        );
        Ok(Size::new(width, height))
    }

    pub fn reset(&mut self) {
        self.cells_left = self.columns;
        self.width.reset();
        self.height.reset();
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn remaining_cells(&self) -> u16 {
        self.cells_left
    }

    pub fn remaining_width(&self) -> u16 {
        self.width.left
    }

    pub fn remaining_height(&self) -> u16 {
        self.height.left
    }
}

impl<R: RngExt> Iterator for ColumnSizeGenerator<R> {
    type Item = Size;

    fn next(&mut self) -> Option<Size> {
        self.next_size().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::from(self.cells_left);
        (left, Some(left))
    }
}

impl<R: RngExt> ExactSizeIterator for ColumnSizeGenerator<R> {}
