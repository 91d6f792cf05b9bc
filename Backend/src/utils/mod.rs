pub mod symbol;
