//! Solver registry with plugin collection

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First supported puzzle year
pub const FIRST_YEAR: u16 = 2015;
/// Number of supported years
pub const YEAR_SPAN: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;

const CAPACITY: usize = YEAR_SPAN * DAYS_PER_YEAR;

/// Flat storage slot for a year/day, or `None` when out of bounds.
#[inline]
fn slot(year: u16, day: u8) -> Option<usize> {
    if year < FIRST_YEAR || year >= FIRST_YEAR + YEAR_SPAN as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    Some((year - FIRST_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

/// Reconstruct the year/day a slot belongs to.
#[inline]
fn date_at(slot: usize) -> (u16, u8) {
    let year = FIRST_YEAR + (slot / DAYS_PER_YEAR) as u16;
    let day = (slot % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory that parses input and produces a ready solver instance.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

struct Entry {
    factory: SolverFactory,
    parts: u8,
}

/// Metadata about a registered solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25)
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
}

/// Builder for a [`SolverRegistry`].
///
/// Registration detects duplicates and out-of-range dates; once built,
/// the registry is immutable.
pub struct RegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl RegistryBuilder {
    /// Create an empty builder with pre-allocated flat storage.
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register an explicit factory for a year/day.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot(year, day).ok_or(RegistrationError::UnsupportedDate(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries[index] = Some(Entry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type for a year/day.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let registry = RegistryBuilder::new()
    ///     .register::<HillClimb>(2022, 12)?
    ///     .build();
    /// ```
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        fn instantiate<'a, S: Solver + 'static>(
            year: u16,
            day: u8,
            input: &'a str,
        ) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        }
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    /// Register every plugin submitted through `inventory`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register the plugins matching a predicate (tag filtering, a single
    /// year, ...).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_where(|plugin| plugin.tags.contains(&"search"))?
    ///     .build();
    /// ```
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry.
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from year/day to solver factories.
pub struct SolverRegistry {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Parse `input` with the registered solver for `year`/`day` and
    /// return the ready instance.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = slot(year, day).ok_or(SolverError::UnsupportedDate(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Metadata for one registered solver, if present.
    pub fn info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        let index = slot(year, day)?;
        self.entries[index].as_ref().map(|e| PuzzleInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Iterate over metadata for every registered solver, in date order.
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = date_at(i);
                PuzzleInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Number of registered solvers.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Type-erased handle letting a solver register itself.
///
/// Blanket-implemented for every [`Solver`], so a `&'static dyn
/// RegisterableSolver` can sit inside a plugin record.
pub trait RegisterableSolver: Sync {
    /// Register this solver with the builder for a year/day.
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this solver implements.
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin record for automatic solver registration.
///
/// Solution crates submit one record per solver:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2022,
///         day: 12,
///         solver: &HillClimb,
///         tags: &["2022", "bfs"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25)
    pub day: u8,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering ("2022", "bfs", "memo", ...)
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_round_trips_valid_dates() {
        for year in FIRST_YEAR..FIRST_YEAR + YEAR_SPAN as u16 {
            for day in 1..=DAYS_PER_YEAR as u8 {
                let index = slot(year, day).unwrap();
                assert_eq!(date_at(index), (year, day));
            }
        }
    }

    #[test]
    fn slot_rejects_out_of_range_dates() {
        assert_eq!(slot(FIRST_YEAR - 1, 1), None);
        assert_eq!(slot(FIRST_YEAR + YEAR_SPAN as u16, 1), None);
        assert_eq!(slot(FIRST_YEAR, 0), None);
        assert_eq!(slot(FIRST_YEAR, 26), None);
    }
}
