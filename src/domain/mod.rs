// Domain layer - Core data models
pub mod device;
pub mod report;
