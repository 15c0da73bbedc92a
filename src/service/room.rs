use entity::room::RoomCategory;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::{allocation::AllocationRepository, room::RoomRepository},
    error::{Error, NotFoundError, ValidationError},
    model::RoomOccupancy,
};

/// Service for the room write boundary and occupancy reads.
///
/// Capacity is never stored; it is derived from [`RoomCategory`] on every
/// read so it cannot disagree with the category.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    /// Creates a new instance of [`RoomService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room.
    ///
    /// # Returns
    /// - `Ok(Model)` - Room created
    /// - `Err(Error::Validation)` - Negative monthly rent (zero is allowed)
    /// - `Err(Error::DbErr)` - Duplicate room number or other database failure
    pub async fn create_room(
        &self,
        room_number: &str,
        category: RoomCategory,
        block: &str,
        floor: i32,
        monthly_rent: Decimal,
    ) -> Result<entity::room::Model, Error> {
        if monthly_rent < Decimal::ZERO {
            return Err(ValidationError::NegativeRent(monthly_rent).into());
        }

        let room = RoomRepository::new(self.db)
            .create(room_number, category, block, floor, monthly_rent)
            .await?;

        info!(room_id = room.id, room_number, "room created");

        Ok(room)
    }

    /// Retrieves a room with its derived capacity and current occupancy
    pub async fn get_room(&self, room_id: i32) -> Result<RoomOccupancy, Error> {
        let room = RoomRepository::new(self.db)
            .get(room_id)
            .await?
            .ok_or(NotFoundError::Room(room_id))?;

        let current_occupancy = AllocationRepository::new(self.db)
            .count_active_for_room(room_id)
            .await?;

        Ok(RoomOccupancy {
            capacity: room.category.capacity(),
            current_occupancy,
            room,
        })
    }

    pub async fn list_rooms(&self) -> Result<Vec<RoomOccupancy>, Error> {
        let allocation_repo = AllocationRepository::new(self.db);
        let rooms = RoomRepository::new(self.db).list().await?;

        let mut occupancies = Vec::with_capacity(rooms.len());
        for room in rooms {
            let current_occupancy = allocation_repo.count_active_for_room(room.id).await?;
            occupancies.push(RoomOccupancy {
                capacity: room.category.capacity(),
                current_occupancy,
                room,
            });
        }

        Ok(occupancies)
    }

    /// Toggles whether the room accepts new open allocations
    pub async fn set_active(
        &self,
        room_id: i32,
        is_active: bool,
    ) -> Result<entity::room::Model, Error> {
        let room = RoomRepository::new(self.db)
            .set_active(room_id, is_active)
            .await?
            .ok_or(NotFoundError::Room(room_id))?;

        info!(room_id, is_active, "room active flag updated");

        Ok(room)
    }
}
