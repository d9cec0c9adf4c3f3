//! Depot-anchored route type.

use serde::Serialize;

use super::location::DEPOT;

/// An ordered sequence of location ids driven by one vehicle.
///
/// The first and last stop are always the depot. A route of length 2
/// (`[0, 0]`) carries no customers.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Route;
///
/// let mut route = Route::empty();
/// assert!(route.is_empty());
/// route.push_customer(4);
/// route.push_customer(2);
/// assert_eq!(route.stops(), &[0, 4, 2, 0]);
/// assert_eq!(route.customers(), &[4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route that leaves the depot and returns immediately.
    pub fn empty() -> Self {
        Self {
            stops: vec![DEPOT, DEPOT],
        }
    }

    /// Creates a route visiting `customers` in order, anchored at the depot.
    pub fn from_customers(customers: &[usize]) -> Self {
        let mut stops = Vec::with_capacity(customers.len() + 2);
        stops.push(DEPOT);
        stops.extend_from_slice(customers);
        stops.push(DEPOT);
        Self { stops }
    }

    /// Full stop sequence including both depot endpoints.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Customer ids in visiting order (depot endpoints excluded).
    pub fn customers(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of stops including both depot endpoints.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Number of customers served.
    pub fn num_customers(&self) -> usize {
        self.stops.len() - 2
    }

    /// Returns `true` if the route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.num_customers() == 0
    }

    /// Appends a customer just before the closing depot.
    pub fn push_customer(&mut self, customer: usize) {
        let last = self.stops.len() - 1;
        self.stops.insert(last, customer);
    }

    /// Removes and returns the customer at `index` of [`Route::customers`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_customers()`.
    pub fn remove_customer_at(&mut self, index: usize) -> usize {
        assert!(index < self.num_customers(), "customer index out of range");
        self.stops.remove(index + 1)
    }

    /// Replaces the customer at `index` of [`Route::customers`], returning the old id.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_customers()`.
    pub fn replace_customer_at(&mut self, index: usize, customer: usize) -> usize {
        assert!(index < self.num_customers(), "customer index out of range");
        std::mem::replace(&mut self.stops[index + 1], customer)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::empty()
    }
}
