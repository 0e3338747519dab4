//! Ranking Policy
//!
//! 方案排序键 (升序): 浪费 → 桌数 → 总容量 → 首桌号字典序。
//! 同一输入永远产出同一顺序，供前端稳定展示。

use crate::seating::resolver::Solution;
use std::cmp::Ordering;

/// Total order over solutions
pub fn solution_order(a: &Solution, b: &Solution) -> Ordering {
    a.waste
        .cmp(&b.waste)
        .then(a.table_count.cmp(&b.table_count))
        .then(a.total_capacity.cmp(&b.total_capacity))
        .then_with(|| first_code(a).cmp(first_code(b)))
}

/// Sort solutions in presentation order
pub fn rank_solutions(solutions: &mut [Solution]) {
    solutions.sort_by(solution_order);
}

fn first_code(solution: &Solution) -> &str {
    solution.tables.first().map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_solution(tables: &[&str], total_capacity: i32, waste: i32) -> Solution {
        Solution {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            total_capacity,
            waste,
            table_count: tables.len(),
        }
    }

    #[test]
    fn test_lower_waste_first() {
        let mut solutions = vec![
            make_solution(&["M4"], 8, 4),
            make_solution(&["M2"], 6, 2),
        ];
        rank_solutions(&mut solutions);
        assert_eq!(solutions[0].tables, vec!["M2"]);
    }

    #[test]
    fn test_fewer_tables_break_waste_tie() {
        let mut solutions = vec![
            make_solution(&["M2", "M3"], 8, 2),
            make_solution(&["M4"], 8, 2),
        ];
        rank_solutions(&mut solutions);
        assert_eq!(solutions[0].tables, vec!["M4"]);
    }

    #[test]
    fn test_lexicographic_tie_break_is_last_resort() {
        let mut solutions = vec![
            make_solution(&["M3"], 4, 0),
            make_solution(&["M2"], 4, 0),
        ];
        rank_solutions(&mut solutions);
        assert_eq!(solutions[0].tables, vec!["M2"]);
        assert_eq!(solutions[1].tables, vec!["M3"]);
    }

    #[test]
    fn test_smaller_capacity_before_code() {
        let mut solutions = vec![
            make_solution(&["M9"], 6, 1),
            make_solution(&["M1"], 5, 1),
        ];
        rank_solutions(&mut solutions);
        // 等浪费等桌数时容量小者优先
        assert_eq!(solutions[0].tables, vec!["M1"]);
    }
}
