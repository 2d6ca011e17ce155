use std::fmt;

/// Number of dan ranks the ranking service buckets players into.
pub const DAN_RANK_COUNT: usize = 19;

/// `(grade_id, name)` as published by the ranking service.
const DAN_RANK_TABLE: [(u32, &str); DAN_RANK_COUNT] = [
    (0, "七級"),
    (1, "六級"),
    (2, "五級"),
    (3, "四級"),
    (4, "三級"),
    (5, "二級"),
    (6, "一級"),
    (7, "初段"),
    (8, "二段"),
    (9, "三段"),
    (10, "四段"),
    (11, "五段"),
    (12, "六段"),
    (13, "七段"),
    (14, "八段"),
    (15, "九段"),
    (16, "十段"),
    (17, "中伝"),
    (18, "皆伝"),
];

/// One skill grade of the ranking service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DanRank {
    pub grade_id: u32,
    pub name: String,
}

impl DanRank {
    pub fn new(grade_id: u32, name: impl Into<String>) -> Self {
        Self {
            grade_id,
            name: name.into(),
        }
    }
}

impl fmt::Display for DanRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (grade {})", self.name, self.grade_id)
    }
}

/// The full rank table, ordered by `grade_id` ascending.
pub fn dan_ranks() -> Vec<DanRank> {
    let mut ranks: Vec<DanRank> = DAN_RANK_TABLE
        .iter()
        .map(|(grade_id, name)| DanRank::new(*grade_id, *name))
        .collect();
    ranks.sort_by_key(|rank| rank.grade_id);
    ranks
}
