pub mod a001_user;
pub mod a002_guinea_pig;
pub mod a003_food_type;
pub mod a004_food_entry;
pub mod a005_weight_entry;
pub mod a006_vitamin_c_entry;
pub mod common;
