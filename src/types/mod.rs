pub mod fuel_tech;
pub mod payload;
pub mod period;
