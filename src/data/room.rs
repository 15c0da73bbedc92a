use chrono::Utc;
use entity::room::RoomCategory;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new room
    ///
    /// Rent validation happens at the service boundary; the repository only
    /// persists what it is given.
    pub async fn create(
        &self,
        room_number: &str,
        category: RoomCategory,
        block: &str,
        floor: i32,
        monthly_rent: Decimal,
    ) -> Result<entity::room::Model, DbErr> {
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(room_number.to_string()),
            category: ActiveValue::Set(category),
            block: ActiveValue::Set(block.to_string()),
            floor: ActiveValue::Set(floor),
            monthly_rent: ActiveValue::Set(monthly_rent),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        room.insert(self.db).await
    }

    pub async fn get(&self, room_id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(room_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Toggles the active flag
    pub async fn set_active(
        &self,
        room_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let room = match entity::prelude::Room::find_by_id(room_id).one(self.db).await? {
            Some(room) => room,
            None => return Ok(None),
        };

        let mut room_am = room.into_active_model();
        room_am.is_active = ActiveValue::Set(is_active);

        let room = room_am.update(self.db).await?;

        Ok(Some(room))
    }
}
