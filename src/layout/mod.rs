mod generator;

use rand::RngExt;

pub use generator::{AxisSizing, ColumnSizeGenerator, GeneratorError, RowConfig};

/// Width and height of one palette cell, in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Shape of the palette: `items` cells laid out `columns` per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    items: u16,
    columns: u16,
}

impl Grid {
    pub fn new(items: u16, columns: u16) -> Result<Self, GeneratorError> {
        if columns == 0 || items == 0 || items % columns != 0 {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "{items} palette items cannot be split into rows of {columns}"
            )));
        }
        Ok(Self { items, columns })
    }

    pub fn items(&self) -> u16 {
        self.items
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.items / self.columns
    }

    /// Row geometry for a palette area of `width` x `height`.
    ///
    /// Rows share the height evenly. Inside a row every cell spans the full row
    /// height and gets a random width of at least an eighth of the area.
    pub fn row_config(&self, width: u16, height: u16) -> Result<RowConfig, GeneratorError> {
        let row_height = height / self.rows();
        if row_height == 0 || width < self.columns {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "a {width}x{height} area cannot hold {} rows of {} cells",
                self.rows(),
                self.columns
            )));
        }
        let min_width = (width >> 3).min(width / self.columns);
        Ok(RowConfig {
            columns: self.columns,
            row_width: width,
            row_height,
            width: AxisSizing::Random { min: min_width },
            height: AxisSizing::Stretch,
        })
    }

    /// Sizes every cell of the palette, one generator cycle per row.
    pub fn layout<R: RngExt>(
        &self,
        width: u16,
        height: u16,
        rng: R,
    ) -> Result<Vec<Vec<Size>>, GeneratorError> {
        let mut generator = ColumnSizeGenerator::new(self.row_config(width, height)?, rng)?;
        layout_rows(&mut generator, self.rows())
    }
}

/// Drains `generator` once per row, resetting it in between.
pub fn layout_rows<R: RngExt>(
    generator: &mut ColumnSizeGenerator<R>,
    rows: u16,
) -> Result<Vec<Vec<Size>>, GeneratorError> {
    (0..rows)
        .map(|_| {
            let mut row = Vec::with_capacity(usize::from(generator.columns()));
            while generator.has_next() {
                row.push(generator.next_size()?);
            }
            generator.reset();
            Ok(row)
        })
        .collect()
}
