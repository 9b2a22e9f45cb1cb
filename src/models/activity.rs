/// One entry in the fixed activity catalog. Seeded at startup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: u32,
    pub title: String,
    pub emoji: String,
    pub category: String,
    pub difficulty: String,
    pub time_needed: String,
    pub description: String,
    pub tips: Vec<String>,
    pub featured: bool,
}
