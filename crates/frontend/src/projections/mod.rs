pub mod p900_history;
