//! Combination Resolver
//!
//! 从空闲合格桌台集合生成满足人数的座位方案 (单桌或声明的拼桌对)，
//! 按 Ranking Policy 排序并截断。纯函数核心。
//!
//! 拼桌只沿显式声明的边展开：A-B 成边当且仅当双方都允许拼桌且
//! 至少一方把对方声明为搭档。不做传递推导，不搜索三桌及以上的组合。

use crate::db::models::DiningTable;
use crate::seating::ranking::rank_solutions;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// 方案截断上限的默认值
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// 座位方案 — 每次请求即时计算，从不落库
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// 桌号列表 (拼桌对按字典序)
    pub tables: Vec<String>,
    pub total_capacity: i32,
    /// 总容量 − 请求人数
    pub waste: i32,
    pub table_count: usize,
}

impl Solution {
    fn single(table: &DiningTable, party_size: i32) -> Self {
        Self {
            tables: vec![table.code.clone()],
            total_capacity: table.capacity,
            waste: table.capacity - party_size,
            table_count: 1,
        }
    }

    fn pair(a: &DiningTable, b: &DiningTable, party_size: i32) -> Self {
        let mut tables = vec![a.code.clone(), b.code.clone()];
        tables.sort();
        let total_capacity = a.capacity + b.capacity;
        Self {
            tables,
            total_capacity,
            waste: total_capacity - party_size,
            table_count: 2,
        }
    }
}

/// 生成排序后的座位方案
///
/// 空结果是正常的"无空位"结局，不是错误。
pub fn suggest(eligible: &[DiningTable], party_size: i32, max_suggestions: usize) -> Vec<Solution> {
    if party_size < 1 {
        return Vec::new();
    }

    let mut pool = single_candidates(eligible, party_size);
    pool.extend(pair_candidates(eligible, party_size));

    rank_solutions(&mut pool);
    pool.truncate(max_suggestions);
    pool
}

/// 单桌方案：容量足够的每张桌台
fn single_candidates(eligible: &[DiningTable], party_size: i32) -> Vec<Solution> {
    eligible
        .iter()
        .filter(|t| t.capacity >= party_size)
        .map(|t| Solution::single(t, party_size))
        .collect()
}

/// 拼桌方案：沿声明的边遍历，对称声明去重为一个候选
fn pair_candidates(eligible: &[DiningTable], party_size: i32) -> Vec<Solution> {
    let by_code: HashMap<&str, &DiningTable> =
        eligible.iter().map(|t| (t.code.as_str(), t)).collect();

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut pairs = Vec::new();

    for table in eligible.iter().filter(|t| t.can_join) {
        let Some(partner_code) = table.join_partner.as_deref() else {
            continue;
        };
        // 搭档被占用、停用或类别不合格时根本不在快照里：不成对，不报错
        let Some(partner) = by_code.get(partner_code) else {
            continue;
        };
        if !partner.can_join || partner.code == table.code {
            continue;
        }

        let key = if table.code < partner.code {
            (table.code.clone(), partner.code.clone())
        } else {
            (partner.code.clone(), table.code.clone())
        };
        if !seen.insert(key) {
            continue;
        }

        if table.capacity + partner.capacity >= party_size {
            pairs.push(Solution::pair(table, partner, party_size));
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(code: &str, capacity: i32, partner: Option<&str>) -> DiningTable {
        DiningTable {
            id: None,
            code: code.to_string(),
            zone: "salon".to_string(),
            capacity,
            available: true,
            can_join: partner.is_some(),
            join_partner: partner.map(str::to_string),
            personal_events: false,
            corporate_events: false,
            events_only: false,
        }
    }

    /// 标准桌台布局: M1(2), M2(4)↔M3(4), M4(8)
    fn standard_layout() -> Vec<DiningTable> {
        vec![
            make_table("M1", 2, None),
            make_table("M2", 4, Some("M3")),
            make_table("M3", 4, Some("M2")),
            make_table("M4", 8, None),
        ]
    }

    #[test]
    fn test_party_of_six_prefers_single_table_over_pair() {
        // 等浪费时单桌排在拼桌前
        let solutions = suggest(&standard_layout(), 6, DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(solutions.len(), 2);

        assert_eq!(solutions[0].tables, vec!["M4"]);
        assert_eq!(solutions[0].waste, 2);
        assert_eq!(solutions[0].table_count, 1);

        assert_eq!(solutions[1].tables, vec!["M2", "M3"]);
        assert_eq!(solutions[1].waste, 2);
        assert_eq!(solutions[1].table_count, 2);
    }

    #[test]
    fn test_party_beyond_max_capacity_yields_empty() {
        let solutions = suggest(&standard_layout(), 10, DEFAULT_MAX_SUGGESTIONS);
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_symmetric_partner_declaration_deduplicated() {
        let tables = vec![make_table("M2", 4, Some("M3")), make_table("M3", 4, Some("M2"))];
        let solutions = suggest(&tables, 6, DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].tables, vec!["M2", "M3"]);
    }

    /// 允许拼桌但自己不声明搭档的桌台
    fn make_joinable(code: &str, capacity: i32) -> DiningTable {
        let mut t = make_table(code, capacity, None);
        t.can_join = true;
        t
    }

    #[test]
    fn test_asymmetric_declaration_still_forms_edge() {
        // 只有 M2 声明了搭档，仍视为有效边
        let tables = vec![make_table("M2", 4, Some("M3")), make_joinable("M3", 4)];

        let solutions = suggest(&tables, 6, DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].tables, vec!["M2", "M3"]);
    }

    #[test]
    fn test_partner_refusing_join_blocks_pair() {
        let mut m3 = make_table("M3", 4, None);
        m3.can_join = false;
        let tables = vec![make_table("M2", 4, Some("M3")), m3];

        assert!(suggest(&tables, 6, DEFAULT_MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn test_missing_partner_forms_no_pair() {
        // 搭档不在合格集合里 (被占用/停用/类别不符)
        let tables = vec![make_table("M2", 4, Some("M3"))];
        assert!(suggest(&tables, 6, DEFAULT_MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn test_no_transitive_chaining() {
        // M2→M3→M5 不会形成三桌组合，也不会形成 M2-M5
        let tables = vec![
            make_table("M2", 2, Some("M3")),
            make_table("M3", 2, Some("M5")),
            make_joinable("M5", 2),
        ];
        assert!(suggest(&tables, 5, DEFAULT_MAX_SUGGESTIONS).is_empty());

        // 4 人时两条声明边各自成立，仅此两对
        let solutions = suggest(&tables, 4, DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].tables, vec!["M2", "M3"]);
        assert_eq!(solutions[1].tables, vec!["M3", "M5"]);
    }

    #[test]
    fn test_waste_ranks_before_table_count() {
        // 浪费小的拼桌排在浪费大的单桌前
        let tables = vec![
            make_table("M9", 12, None),
            make_table("M2", 3, Some("M3")),
            make_table("M3", 3, Some("M2")),
        ];
        let solutions = suggest(&tables, 6, DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(solutions[0].tables, vec!["M2", "M3"]); // waste 0
        assert_eq!(solutions[1].tables, vec!["M9"]); // waste 6
    }

    #[test]
    fn test_truncation_to_max_suggestions() {
        let tables: Vec<DiningTable> = (1..=8)
            .map(|i| make_table(&format!("T{}", i), 4, None))
            .collect();
        let solutions = suggest(&tables, 2, 5);
        assert_eq!(solutions.len(), 5);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let layout = standard_layout();
        let first = suggest(&layout, 4, DEFAULT_MAX_SUGGESTIONS);
        let second = suggest(&layout, 4, DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_waste_single_table_wins() {
        let solutions = suggest(&standard_layout(), 4, DEFAULT_MAX_SUGGESTIONS);
        // M2 和 M3 均为 waste 0 单桌，M2 字典序靠前
        assert_eq!(solutions[0].tables, vec!["M2"]);
        assert_eq!(solutions[0].waste, 0);
        assert_eq!(solutions[1].tables, vec!["M3"]);
    }

    #[test]
    fn test_invalid_party_size_yields_empty() {
        assert!(suggest(&standard_layout(), 0, DEFAULT_MAX_SUGGESTIONS).is_empty());
    }
}
