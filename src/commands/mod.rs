pub mod day;
pub mod events;
pub mod month;
pub mod new;
