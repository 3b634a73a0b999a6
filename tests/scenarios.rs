use hiscore::{score_entry, ScoreOrder, ScoreTable, ERROR_TEXT};

fn arcade_table(order: ScoreOrder, maximum: usize) -> ScoreTable {
    let mut table = ScoreTable::with_order(order);
    table.set_maximum_entries(maximum);
    table.define_column("score", 1000);
    table.define_column("name", "H B");
    table
}

#[test]
fn test_high_score_table_fills_then_rejects() {
    let mut table = arcade_table(ScoreOrder::HighScore, 3);

    assert_eq!(table.add_score(score_entry![2000, "HB"]), Some(0));
    assert_eq!(table.add_score(score_entry![1500, "ED"]), Some(1));
    assert_eq!(table.add_score(score_entry![1000, "EZY"]), Some(2));

    let before = table.to_string();
    assert_eq!(table.add_score(score_entry![500, "X"]), None);
    assert_eq!(table.entries(), 3);
    assert_eq!(table.to_string(), before);
}

#[test]
fn test_low_score_table_prefers_smaller_scores() {
    let mut table = arcade_table(ScoreOrder::LowScore, 2);

    assert_eq!(table.add_score(score_entry![50, "A"]), Some(0));
    assert_eq!(table.add_score(score_entry![10, "B"]), Some(0));
    assert_eq!(table.add_score(score_entry![100, "C"]), None);

    assert_eq!(table.top_score(), 10);
    assert_eq!(table.bottom_score(), 50);
}

#[test]
fn test_entry_missing_attribute_is_invalid() {
    let table = arcade_table(ScoreOrder::HighScore, 3);
    assert!(!table.score_valid(&score_entry![2000]));
}

#[test]
fn test_out_of_range_lookups_return_sentinels() {
    let mut table = arcade_table(ScoreOrder::HighScore, 3);
    table.add_score(score_entry![2000, "HB"]);
    table.add_score(score_entry![1500, "ED"]);
    table.add_score(score_entry![1000, "EZY"]);

    assert_eq!(table.row_string(5, " "), ERROR_TEXT);
    assert_eq!(table.item_value_by_name(0, "UNKNOWN"), None);
    assert_eq!(table.get_row_object(3), None);
    assert_eq!(table.column_name(7), ERROR_TEXT);
}

#[test]
fn test_equal_score_queues_behind_existing_entry() {
    let mut table = arcade_table(ScoreOrder::HighScore, 3);
    table.add_score(score_entry![2000, "OLD"]);
    table.add_score(score_entry![1000, "LOW"]);

    assert_eq!(table.add_score(score_entry![2000, "NEW"]), Some(1));
    assert_eq!(table.item_string_by_name(0, "name"), "OLD");
    assert_eq!(table.item_string_by_name(1, "name"), "NEW");

    // A full table turns away a tie with the last entry
    assert_eq!(table.add_score(score_entry![1000, "TIE"]), None);
}

#[test]
fn test_rendering_full_table() {
    let mut table = arcade_table(ScoreOrder::HighScore, 3);
    table.add_score(score_entry![2000, "HB"]);
    table.add_score(score_entry![1500, "ED"]);

    assert_eq!(
        table.to_string(),
        "RANK SCORE NAME~1    2000 HB~2    1500 ED~"
    );
    assert_eq!(
        table.to_string_with(hiscore::output::compact_score),
        "RANK SCORE NAME~1    2k HB ~2    1.5k ED ~"
    );
}
