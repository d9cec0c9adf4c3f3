//! Solution text output.

use crate::models::Solution;

/// Formats a solution as text.
///
/// The first line holds the total distance (six decimals) and the
/// optimality flag, which is always `0`. Each following line lists one
/// vehicle's stops, depot included at both ends.
///
/// # Examples
///
/// ```
/// use u_cvrp::io::format_solution;
/// use u_cvrp::models::{Route, Solution};
///
/// let sol = Solution::new(vec![Route::from_customers(&[2, 1]), Route::empty()], 12.5);
/// assert_eq!(format_solution(&sol), "12.500000 0\n0 2 1 0\n0 0\n");
/// ```
pub fn format_solution(solution: &Solution) -> String {
    let header = format!(
        "{:.6} {}\n",
        solution.total_distance(),
        u8::from(solution.is_optimal())
    );
    header + &format_routes(solution)
}

/// One line per route, stops separated by spaces.
pub(crate) fn format_routes(solution: &Solution) -> String {
    solution
        .routes()
        .iter()
        .map(|route| {
            let stops: Vec<String> = route.stops().iter().map(|s| s.to_string()).collect();
            stops.join(" ") + "\n"
        })
        .collect()
}
