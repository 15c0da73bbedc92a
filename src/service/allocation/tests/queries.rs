use roomledger_test_utils::prelude::*;

use crate::{model::AllocationFilter, service::allocation::AllocationService};

use super::{date, seed_double_room, seed_single_room};

/// Expect only the open allocation back, never closed history
#[tokio::test]
async fn active_allocation_skips_closed_records() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    test.fixtures()
        .insert_allocation(
            student.id,
            room.id,
            date(2023, 1, 1),
            Some(date(2023, 6, 1)),
        )
        .await?;
    let open = test
        .fixtures()
        .insert_allocation(student.id, room.id, date(2024, 1, 1), None)
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    let active = allocation_service
        .active_allocation_for(student.id)
        .await
        .unwrap();

    assert_eq!(active.map(|a| a.id), Some(open.id));

    Ok(())
}

/// Expect None for a student with only closed records
#[tokio::test]
async fn active_allocation_none_when_all_closed() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let student = test.fixtures().insert_student("ada@example.com").await?;

    test.fixtures()
        .insert_allocation(
            student.id,
            room.id,
            date(2023, 1, 1),
            Some(date(2023, 6, 1)),
        )
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    let active = allocation_service
        .active_allocation_for(student.id)
        .await
        .unwrap();

    assert!(active.is_none());

    Ok(())
}

/// Expect the room filter to return only that room's allocations
#[tokio::test]
async fn list_filters_by_room() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room_a = seed_double_room(&test).await?;
    let room_b = seed_single_room(&test).await?;
    let ada = test.fixtures().insert_student("ada@example.com").await?;
    let grace = test.fixtures().insert_student("grace@example.com").await?;

    test.fixtures()
        .insert_allocation(ada.id, room_a.id, date(2024, 1, 1), None)
        .await?;
    test.fixtures()
        .insert_allocation(grace.id, room_b.id, date(2024, 1, 1), None)
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    let allocations = allocation_service
        .list_allocations(AllocationFilter::by_room(room_a.id))
        .await
        .unwrap();

    assert_eq!(allocations.len(), 1);
    assert_eq!(allocations[0].room_id, room_a.id);

    Ok(())
}

/// Expect the student filter to include both open and closed records
#[tokio::test]
async fn list_filters_by_student() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let ada = test.fixtures().insert_student("ada@example.com").await?;
    let grace = test.fixtures().insert_student("grace@example.com").await?;

    test.fixtures()
        .insert_allocation(
            ada.id,
            room.id,
            date(2023, 1, 1),
            Some(date(2023, 6, 1)),
        )
        .await?;
    test.fixtures()
        .insert_allocation(ada.id, room.id, date(2024, 1, 1), None)
        .await?;
    test.fixtures()
        .insert_allocation(grace.id, room.id, date(2024, 1, 1), None)
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    let allocations = allocation_service
        .list_allocations(AllocationFilter::by_student(ada.id))
        .await
        .unwrap();

    assert_eq!(allocations.len(), 2);
    assert!(allocations.iter().all(|a| a.student_id == ada.id));

    Ok(())
}

/// Expect the empty filter to return every allocation
#[tokio::test]
async fn list_without_filter_returns_all() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let room = seed_double_room(&test).await?;
    let ada = test.fixtures().insert_student("ada@example.com").await?;
    let grace = test.fixtures().insert_student("grace@example.com").await?;

    test.fixtures()
        .insert_allocation(ada.id, room.id, date(2024, 1, 1), None)
        .await?;
    test.fixtures()
        .insert_allocation(grace.id, room.id, date(2024, 1, 1), None)
        .await?;

    let allocation_service = AllocationService::new(&test.db);
    let allocations = allocation_service
        .list_allocations(AllocationFilter::default())
        .await
        .unwrap();

    assert_eq!(allocations.len(), 2);

    Ok(())
}
