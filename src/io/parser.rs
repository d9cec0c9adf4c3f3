//! Instance text parser.
//!
//! The format is whitespace-delimited: a header `N V C` (location count,
//! vehicle count, vehicle capacity) followed by `N` records `demand x y`.
//! The first record is the depot. Tokens may be split across lines freely;
//! anything after the last record is ignored.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, RoutingError};
use crate::geometry::Point;
use crate::models::{Fleet, Instance};

/// Largest vehicle count accepted; each vehicle owns a route in memory.
pub const MAX_VEHICLES: usize = 1 << 20;

/// Whitespace tokens tagged with their 1-based line number.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let last_line = text.lines().count().max(1);
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            inner: Box::new(inner),
            last_line,
        }
    }

    fn next_value<T: FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let (line, token) = self.inner.next().ok_or_else(|| {
            RoutingError::malformed(self.last_line, format!("unexpected end of input, expected {what}"))
        })?;
        token
            .parse()
            .map(|value| (line, value))
            .map_err(|_| RoutingError::malformed(line, format!("invalid {what} `{token}`")))
    }
}

/// Parses an instance from its text form.
///
/// # Errors
///
/// Returns [`RoutingError::MalformedInput`] for missing or unparseable
/// tokens, a zero location count, more than [`MAX_VEHICLES`] vehicles,
/// negative demands and non-finite coordinates.
///
/// # Examples
///
/// ```
/// use u_cvrp::io::parse_instance;
///
/// let text = "3 2 10\n0 0 0\n4 1 0\n5 0 1\n";
/// let instance = parse_instance(text).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.fleet().vehicles(), 2);
/// assert_eq!(instance.location(2).demand(), 5);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance> {
    let mut tokens = Tokens::new(text);

    let (line, n) = tokens.next_value::<usize>("location count")?;
    if n == 0 {
        return Err(RoutingError::malformed(line, "instance has no locations"));
    }
    let (line, vehicles) = tokens.next_value::<usize>("vehicle count")?;
    if vehicles > MAX_VEHICLES {
        return Err(RoutingError::malformed(
            line,
            format!("vehicle count {vehicles} exceeds {MAX_VEHICLES}"),
        ));
    }
    let (_, capacity) = tokens.next_value::<u32>("vehicle capacity")?;

    let mut sites = Vec::new();
    for _ in 0..n {
        let (line, demand) = tokens.next_value::<i64>("demand")?;
        if demand < 0 {
            return Err(RoutingError::malformed(line, format!("negative demand {demand}")));
        }
        let demand = u32::try_from(demand)
            .map_err(|_| RoutingError::malformed(line, format!("demand {demand} is too large")))?;
        let (_, x) = tokens.next_value::<f64>("x coordinate")?;
        let (line, y) = tokens.next_value::<f64>("y coordinate")?;
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(RoutingError::malformed(line, "coordinates must be finite"));
        }
        sites.push((demand, point));
    }

    debug!(locations = n, vehicles, capacity, "instance parsed");
    Ok(Instance::new(sites, Fleet::new(vehicles, capacity)))
}

/// Reads and parses an instance file.
///
/// # Errors
///
/// Returns [`RoutingError::Io`] if the file cannot be read, otherwise as
/// [`parse_instance`].
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| RoutingError::io(path, e))?;
    parse_instance(&text)
}
