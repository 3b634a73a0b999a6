use tracing::{debug, trace};

use super::{ScoreEntry, ScoreTable, Value};

impl ScoreTable {
    /// Check an entry against the column schema.
    ///
    /// The entry must have one value per column, and every value after the
    /// rank key must carry its column's type tag. The rank key itself is not
    /// type checked so 32- and 64-bit scores can share a table.
    pub fn score_valid(&self, entry: &[Value]) -> bool {
        if entry.is_empty() || entry.len() != self.schema.len() {
            return false;
        }
        entry
            .iter()
            .zip(self.schema.columns())
            .skip(1)
            .all(|(value, column)| value.data_type() == column.data_type)
    }

    /// Position a score would take in the table, or None if it does not
    /// qualify.
    ///
    /// A score goes ahead of the first stored score it strictly beats, so
    /// ties keep their existing places. With no such row it goes to the end,
    /// which only qualifies while that position is below capacity.
    pub fn score_check(&self, score: i64) -> Option<usize> {
        let position = self
            .rows
            .iter()
            .position(|row| {
                row.first()
                    .and_then(Value::rank_key)
                    .is_some_and(|stored| self.order.is_better(score, stored))
            })
            .unwrap_or(self.rows.len());

        let qualified = position < self.maximum_entries;
        trace!(score, position, qualified, "Checked score");
        qualified.then_some(position)
    }

    pub fn score_check_int(&self, score: i32) -> Option<usize> {
        self.score_check(i64::from(score))
    }

    /// Like [`ScoreTable::score_check`], for a rank key of any value type.
    /// Values with no numeric rank key never qualify.
    pub fn score_check_value(&self, score: &Value) -> Option<usize> {
        self.score_check(score.rank_key()?)
    }

    /// Insert an entry at its ranked position.
    ///
    /// Returns the index the entry was stored at, or None if it failed
    /// validation or did not qualify. Rows past capacity are evicted from the
    /// bottom of the table on every call, including rejected ones, so a
    /// lowered capacity holds once this returns.
    pub fn add_score(&mut self, entry: ScoreEntry) -> Option<usize> {
        self.evict_surplus();

        if !self.score_valid(&entry) {
            debug!(
                values = entry.len(),
                columns = self.schema.len(),
                "Rejected entry that does not match the schema"
            );
            return None;
        }

        let position = self.score_check_value(&entry[0])?;
        debug!(position, score = %entry[0], "Inserting score");
        self.rows.insert(position, entry);
        self.evict_surplus();

        Some(position)
    }

    fn evict_surplus(&mut self) {
        if self.rows.len() > self.maximum_entries {
            let evicted = self.rows.len() - self.maximum_entries;
            self.rows.truncate(self.maximum_entries);
            debug!(evicted, "Evicted scores past capacity");
        }
    }

    /// Remove every row. The schema is kept.
    pub fn clear_table(&mut self) {
        self.rows = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score_entry;
    use crate::table::ScoreOrder;
    use proptest::prelude::*;

    fn sample_table(order: ScoreOrder, maximum: usize) -> ScoreTable {
        let mut table = ScoreTable::with_order(order);
        table.set_maximum_entries(maximum);
        table.define_column("score", 1000);
        table.define_column("name", "H B");
        table
    }

    fn rank_keys(table: &ScoreTable) -> Vec<i64> {
        table
            .table_details()
            .iter()
            .map(|row| row[0].rank_key().unwrap())
            .collect()
    }

    #[test]
    fn test_score_valid_accepts_matching_entry() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert!(table.score_valid(&score_entry![2000, "HB"]));
    }

    #[test]
    fn test_score_valid_allows_any_rank_key_width() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert!(table.score_valid(&score_entry![5_000_000_000i64, "HB"]));
    }

    #[test]
    fn test_score_valid_rejects_missing_attribute() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert!(!table.score_valid(&score_entry![2000]));
    }

    #[test]
    fn test_score_valid_rejects_extra_attribute() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert!(!table.score_valid(&score_entry![2000, "HB", 3]));
    }

    #[test]
    fn test_score_valid_rejects_type_mismatch() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert!(!table.score_valid(&score_entry![2000, 42]));
    }

    #[test]
    fn test_score_valid_rejects_empty_entry() {
        let table = ScoreTable::new();
        assert!(!table.score_valid(&[]));
    }

    #[test]
    fn test_score_check_empty_table() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert_eq!(table.score_check(0), Some(0));
        assert_eq!(table.score_check(-50), Some(0));
    }

    #[test]
    fn test_score_check_high_score_positions() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        table.add_score(score_entry![2000, "A"]);
        table.add_score(score_entry![1000, "B"]);
        assert_eq!(table.score_check(3000), Some(0));
        assert_eq!(table.score_check(1500), Some(1));
        assert_eq!(table.score_check(500), Some(2));
    }

    #[test]
    fn test_score_check_ties_go_after_existing() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        table.add_score(score_entry![2000, "A"]);
        table.add_score(score_entry![1000, "B"]);
        assert_eq!(table.score_check(2000), Some(1));
        assert_eq!(table.score_check(1000), Some(2));
    }

    #[test]
    fn test_score_check_full_table() {
        let mut table = sample_table(ScoreOrder::LowScore, 2);
        table.add_score(score_entry![10, "A"]);
        table.add_score(score_entry![20, "B"]);
        assert_eq!(table.score_check(20), None);
        assert_eq!(table.score_check(19), Some(1));
        assert_eq!(table.score_check_int(5), Some(0));
    }

    #[test]
    fn test_score_check_value_unconvertible() {
        let table = sample_table(ScoreOrder::HighScore, 3);
        assert_eq!(table.score_check_value(&Value::from("lots")), None);
        assert_eq!(table.score_check_value(&Value::Float(f64::NAN)), None);
        assert_eq!(table.score_check_value(&Value::from("250")), Some(0));
    }

    #[test]
    fn test_add_score_high_score_scenario() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        assert_eq!(table.add_score(score_entry![2000, "HB"]), Some(0));
        assert_eq!(table.add_score(score_entry![1500, "ED"]), Some(1));
        assert_eq!(table.add_score(score_entry![1000, "EZY"]), Some(2));
        let before = table.clone();
        assert_eq!(table.add_score(score_entry![500, "X"]), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_add_score_low_score_scenario() {
        let mut table = sample_table(ScoreOrder::LowScore, 2);
        assert_eq!(table.add_score(score_entry![50, "A"]), Some(0));
        assert_eq!(table.add_score(score_entry![10, "B"]), Some(0));
        assert_eq!(table.add_score(score_entry![100, "C"]), None);
        assert_eq!(rank_keys(&table), vec![10, 50]);
    }

    #[test]
    fn test_add_score_evicts_bottom_row() {
        let mut table = sample_table(ScoreOrder::HighScore, 2);
        table.add_score(score_entry![300, "A"]);
        table.add_score(score_entry![100, "C"]);
        assert_eq!(table.add_score(score_entry![200, "B"]), Some(1));
        assert_eq!(rank_keys(&table), vec![300, 200]);
    }

    #[test]
    fn test_add_score_rejects_invalid_entry() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        table.add_score(score_entry![300, "A"]);
        let before = table.clone();
        assert_eq!(table.add_score(score_entry![2000]), None);
        assert_eq!(table.add_score(score_entry![2000, true]), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_add_score_rejects_unconvertible_rank_key() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        assert_eq!(table.add_score(score_entry!["lots", "A"]), None);
        assert_eq!(table.entries(), 0);
    }

    #[test]
    fn test_add_score_mixes_rank_key_widths() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        table.add_score(score_entry![2000, "A"]);
        assert_eq!(table.add_score(score_entry![5_000_000_000i64, "B"]), Some(0));
        assert_eq!(rank_keys(&table), vec![5_000_000_000, 2000]);
    }

    #[test]
    fn test_lowered_capacity_evicts_on_next_insert() {
        let mut table = sample_table(ScoreOrder::HighScore, 4);
        for score in [400, 300, 200, 100] {
            table.add_score(score_entry![score, "A"]);
        }
        table.set_maximum_entries(2);
        // Nothing changes until the next add_score call
        assert_eq!(table.entries(), 4);
        assert_eq!(table.add_score(score_entry![350, "B"]), Some(1));
        assert_eq!(rank_keys(&table), vec![400, 350]);
    }

    #[test]
    fn test_lowered_capacity_rejects_positions_past_it() {
        let mut table = sample_table(ScoreOrder::HighScore, 4);
        for score in [400, 300, 200, 100] {
            table.add_score(score_entry![score, "A"]);
        }
        table.set_maximum_entries(2);
        assert_eq!(table.score_check(250), None);
        assert_eq!(table.add_score(score_entry![250, "B"]), None);
        assert!(table.entries() <= table.maximum_entries());
        assert_eq!(rank_keys(&table), vec![400, 300]);
    }

    #[test]
    fn test_lowered_capacity_holds_after_rejected_entry() {
        let mut table = sample_table(ScoreOrder::HighScore, 4);
        for score in [400, 300, 200, 100] {
            table.add_score(score_entry![score, "A"]);
        }
        table.set_maximum_entries(2);
        assert_eq!(table.add_score(score_entry![50, "B"]), None);
        assert_eq!(table.entries(), 2);

        table.set_maximum_entries(1);
        assert_eq!(table.add_score(score_entry![999]), None);
        assert_eq!(rank_keys(&table), vec![400]);
    }

    #[test]
    fn test_zero_capacity_never_qualifies() {
        let mut table = sample_table(ScoreOrder::HighScore, 0);
        assert_eq!(table.add_score(score_entry![1, "A"]), None);
    }

    #[test]
    fn test_clear_table_keeps_schema() {
        let mut table = sample_table(ScoreOrder::HighScore, 3);
        table.add_score(score_entry![300, "A"]);
        table.clear_table();
        assert_eq!(table.entries(), 0);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.add_score(score_entry![1, "B"]), Some(0));
    }

    fn order_strategy() -> impl Strategy<Value = ScoreOrder> {
        prop_oneof![Just(ScoreOrder::HighScore), Just(ScoreOrder::LowScore)]
    }

    proptest! {
        #[test]
        fn prop_table_stays_sorted_and_bounded(
            order in order_strategy(),
            maximum in 1usize..8,
            scores in prop::collection::vec(-50i64..50, 0..40),
        ) {
            let mut table = sample_table(order, maximum);
            for score in scores {
                table.add_score(score_entry![score, "P"]);
                prop_assert!(table.entries() <= maximum);
                let keys = rank_keys(&table);
                for pair in keys.windows(2) {
                    prop_assert!(!order.is_better(pair[1], pair[0]));
                }
            }
        }

        #[test]
        fn prop_lowered_capacity_holds_after_any_add(
            order in order_strategy(),
            initial in 1usize..8,
            lowered in 0usize..8,
            scores in prop::collection::vec(-50i64..50, 0..20),
            candidate in -50i64..50,
        ) {
            let mut table = sample_table(order, initial);
            for score in scores {
                table.add_score(score_entry![score, "P"]);
            }
            table.set_maximum_entries(lowered);
            table.add_score(score_entry![candidate, "Q"]);
            prop_assert!(table.entries() <= table.maximum_entries());
        }

        #[test]
        fn prop_ties_keep_insertion_order(
            order in order_strategy(),
            maximum in 1usize..8,
            scores in prop::collection::vec(0i64..5, 0..40),
        ) {
            let mut table = ScoreTable::with_order(order);
            table.set_maximum_entries(maximum);
            table.define_column("score", 0i64);
            table.define_column("seq", 0i64);
            for (seq, score) in scores.into_iter().enumerate() {
                table.add_score(score_entry![score, seq as i64]);
            }
            for pair in table.table_details().windows(2) {
                if pair[0][0] == pair[1][0] {
                    prop_assert!(pair[0][1].rank_key() < pair[1][1].rank_key());
                }
            }
        }

        #[test]
        fn prop_rejected_entries_leave_table_unchanged(
            scores in prop::collection::vec(-50i64..50, 0..10),
            candidate in -50i64..50,
        ) {
            let mut table = sample_table(ScoreOrder::HighScore, 5);
            for score in scores {
                table.add_score(score_entry![score, "P"]);
            }
            let before = table.clone();
            prop_assert_eq!(table.add_score(score_entry![candidate]), None);
            prop_assert_eq!(table.add_score(score_entry![candidate, 7]), None);
            prop_assert_eq!(table, before);
        }
    }
}
