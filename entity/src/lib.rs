pub mod prelude;

pub mod player;
pub mod sea_orm_active_enums;
