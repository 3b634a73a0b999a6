use super::{ScoreTable, Value};

/// Text returned by string accessors for an invalid row or column
pub const ERROR_TEXT: &str = "ERROR";

/// Returned by the score accessors when the table is empty
pub const EMPTY_SCORE: i64 = -1;

impl ScoreTable {
    /// Number of scores currently in the table
    pub fn entries(&self) -> usize {
        self.rows.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Name of a column, or [`ERROR_TEXT`] if there is no such column
    pub fn column_name(&self, column: usize) -> &str {
        self.schema
            .get(column)
            .map(|c| c.name.as_str())
            .unwrap_or(ERROR_TEXT)
    }

    /// Value in the given column of the best entry
    pub fn top(&self, column: usize) -> Option<&Value> {
        self.item_value_as_object(0, column)
    }

    /// Value in the given column of the last entry
    pub fn bottom(&self, column: usize) -> Option<&Value> {
        let last = self.rows.len().checked_sub(1)?;
        self.item_value_as_object(last, column)
    }

    /// Rank key of the best entry, or None when the table is empty
    pub fn top_score_checked(&self) -> Option<i64> {
        self.rows.first()?.first()?.rank_key()
    }

    /// Rank key of the last entry, or None when the table is empty
    pub fn bottom_score_checked(&self) -> Option<i64> {
        self.rows.last()?.first()?.rank_key()
    }

    /// Rank key of the best entry, or [`EMPTY_SCORE`] when the table is empty.
    ///
    /// A stored score of -1 is indistinguishable from an empty table here;
    /// check [`ScoreTable::entries`] first or use
    /// [`ScoreTable::top_score_checked`].
    pub fn top_score_large(&self) -> i64 {
        self.top_score_checked().unwrap_or(EMPTY_SCORE)
    }

    /// Same as [`ScoreTable::top_score_large`] for the last entry
    pub fn bottom_score_large(&self) -> i64 {
        self.bottom_score_checked().unwrap_or(EMPTY_SCORE)
    }

    /// 32-bit view of [`ScoreTable::top_score_large`]. Larger scores truncate.
    pub fn top_score(&self) -> i32 {
        self.top_score_large() as i32
    }

    /// 32-bit view of [`ScoreTable::bottom_score_large`]. Larger scores truncate.
    pub fn bottom_score(&self) -> i32 {
        self.bottom_score_large() as i32
    }

    /// All values of a row
    pub fn get_row_object(&self, row: usize) -> Option<&[Value]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn item_value_as_object(&self, row: usize, column: usize) -> Option<&Value> {
        if column >= self.schema.len() {
            return None;
        }
        self.rows.get(row)?.get(column)
    }

    /// Look a value up by case-insensitive column name
    pub fn item_value_by_name(&self, row: usize, name: &str) -> Option<&Value> {
        let column = self.schema.find(name)?;
        self.item_value_as_object(row, column)
    }

    /// Rendered value, or [`ERROR_TEXT`] for an invalid row or column
    pub fn item_value_as_string(&self, row: usize, column: usize) -> String {
        self.item_value_as_object(row, column)
            .map(Value::to_string)
            .unwrap_or_else(|| ERROR_TEXT.to_string())
    }

    pub fn item_string_by_name(&self, row: usize, name: &str) -> String {
        self.item_value_by_name(row, name)
            .map(Value::to_string)
            .unwrap_or_else(|| ERROR_TEXT.to_string())
    }
}
