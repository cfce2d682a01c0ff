pub mod a002_guinea_pig;
pub mod a003_food_type;
