// Application layer - Use cases
pub mod footprint_service;
pub mod row_evaluator;
