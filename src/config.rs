use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    algorithms::{Generator, Random, Solver},
    dims::Dims,
    gameboard::{Grid, GridError},
    renderer::Renderer,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Caller supplied maze parameters.
///
/// Dimensions are validated when the grid is built, a missing seed means a different maze
/// every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub num_cols: i32,
    pub num_rows: i32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            num_cols: 10,
            num_rows: 10,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(num_cols: i32, num_rows: i32) -> Self {
        Self {
            num_cols,
            num_rows,
            seed: None,
        }
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::preference_dir().map(|dir| dir.join("maze-solver").join("config.ron"))
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(text)?)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, Default::default())?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&text)
    }

    /// Like [`MazeConfig::load`], but a missing file gives the default config.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {:?}, using defaults", path.as_ref());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn build_grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.num_cols, self.num_rows)
    }

    /// Loads the config at `path` and builds the grid it describes.
    pub fn grid_from_file(path: impl AsRef<Path>) -> Result<Grid, ConfigError> {
        Ok(Self::load(path)?.build_grid()?)
    }

    pub fn generator(&self) -> Generator<Random> {
        Generator::from_seed(self.seed)
    }

    /// Builds, carves and solves a maze, returns the solved grid.
    ///
    /// The path is available from [`Grid::solution`].
    pub fn run<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<Grid, GridError> {
        let mut grid = self.build_grid()?;
        self.generator().carve_with(&mut grid, renderer)?;

        let solved = Solver::new().solve_with(&mut grid, renderer).is_some();
        debug!(
            "{:?} maze solved: {}",
            Dims(self.num_cols, self.num_rows),
            solved
        );

        Ok(grid)
    }
}
