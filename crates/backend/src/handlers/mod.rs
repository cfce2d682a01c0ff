pub mod a002_guinea_pig;
pub mod a003_food_type;
pub mod a004_food_entry;
pub mod a005_weight_entry;
pub mod d400_daily_summary;
pub mod d401_statistics;
pub mod p900_history;
