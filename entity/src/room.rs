//! Room entity.
//!
//! Rooms carry a category (`single` or `double`) from which their capacity is
//! derived. Capacity is intentionally not a stored column; see
//! [`RoomCategory::capacity`].

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-facing room number, unique across the hostel (e.g. "A-101")
    #[sea_orm(unique)]
    pub room_number: String,
    pub category: RoomCategory,
    pub block: String,
    pub floor: i32,
    /// Monthly rent used as the charge amount for new allocations. Never negative.
    pub monthly_rent: Decimal,
    /// Inactive rooms refuse new open allocations
    pub is_active: bool,
    pub created_at: DateTime,
}

/// Room category, the sole source of truth for room capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum RoomCategory {
    #[sea_orm(string_value = "single")]
    Single,
    #[sea_orm(string_value = "double")]
    Double,
}

impl RoomCategory {
    /// Maximum number of simultaneously active allocations the room may hold.
    pub fn capacity(&self) -> u64 {
        match self {
            RoomCategory::Single => 1,
            RoomCategory::Double => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::allocation::Entity")]
    Allocation,
}

impl Related<super::allocation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Allocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
