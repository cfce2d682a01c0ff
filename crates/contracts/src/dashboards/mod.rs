pub mod d400_daily_summary;
pub mod d401_statistics;
