pub mod formatter;

pub use formatter::{
    compact_score, format_board, padded_score, render_lines, should_use_colors, BoardOptions,
    DEFAULT_SCORE_DIGITS, ROW_TERMINATOR,
};
