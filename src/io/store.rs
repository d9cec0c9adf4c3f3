//! Best-known solutions on disk.
//!
//! One file per instance size, named by the number of locations, holding
//! the solution in the [`format_solution`](super::format_solution) layout
//! except that the distance is written at full precision, so the value read
//! back compares exactly against the next candidate. A new solution replaces
//! the stored one only if it is strictly shorter or the stored value cannot
//! be read.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::format::format_routes;
use crate::error::{Result, RoutingError};
use crate::models::Solution;

/// Directory of best-known solutions keyed by instance size.
///
/// # Examples
///
/// ```no_run
/// use u_cvrp::io::BestKnownStore;
/// use u_cvrp::models::{Route, Solution};
///
/// let store = BestKnownStore::create("answers").unwrap();
/// let sol = Solution::new(vec![Route::from_customers(&[1])], 2.0);
/// if store.offer(2, &sol).unwrap() {
///     println!("new best for size 2");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BestKnownStore {
    dir: PathBuf,
}

impl BestKnownStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Io`] if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| RoutingError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Root directory of the store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the best solution for instances with `size` locations.
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.dir.join(size.to_string())
    }

    /// Stored objective for `size`, or `None` if absent or unreadable.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Io`] for filesystem failures other than a
    /// missing file.
    pub fn best_value(&self, size: usize) -> Result<Option<f64>> {
        let path = self.path_for(size);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => return Ok(None),
            Err(e) => return Err(RoutingError::io(path, e)),
        };
        Ok(text
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse::<f64>().ok())
            .filter(|v| !v.is_nan()))
    }

    /// Stores `solution` if it beats the recorded value for `size`.
    ///
    /// Returns whether the file was written.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Io`] if reading or writing fails.
    pub fn offer(&self, size: usize, solution: &Solution) -> Result<bool> {
        let candidate = solution.total_distance();
        if let Some(best) = self.best_value(size)? {
            if best <= candidate {
                debug!(size, best, candidate, "best-known value kept");
                return Ok(false);
            }
        }
        let path = self.path_for(size);
        let text = format!(
            "{} {}\n{}",
            candidate,
            u8::from(solution.is_optimal()),
            format_routes(solution)
        );
        fs::write(&path, text).map_err(|e| RoutingError::io(&path, e))?;
        info!(size, distance = candidate, path = %path.display(), "best-known solution updated");
        Ok(true)
    }
}
