// End-to-end drag and drop against a SQLite event store
mod fixtures;

use calendar_dnd::dnd::{
    DataTransfer, DragController, DropEffect, DropOutcome, EventUpdate, PointerEvent,
    RejectReason,
};
use calendar_dnd::models::event::Event;
use calendar_dnd::services::database::Database;
use calendar_dnd::services::event::EventService;
use egui::pos2;
use fixtures::{july, month_grid, slot_rect, week_grid};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn setup_db() -> Database {
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

fn seed_event(service: &EventService) -> Event {
    let event = Event::builder()
        .title("Team Meeting")
        .category("Work")
        .date(july(10))
        .times("10:00", "11:00")
        .unwrap()
        .build()
        .unwrap();
    service.create(event).expect("Failed to create event")
}

#[tokio::test]
async fn test_drag_to_other_day_in_month_view() {
    init_logging();
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    let grid = month_grid();
    let mut controller = DragController::new(service.updater());

    let mut transfer = DataTransfer::new();
    assert!(controller.on_drag_start(&event, pos2(15.0, 15.0), Some(&mut transfer)));
    let id_text = event.id.unwrap().to_string();
    assert_eq!(transfer.get_data("text/plain"), Some(id_text.as_str()));

    let mut over = PointerEvent::new(grid.tree.node(grid.cell(15)), pos2(300.0, 300.0))
        .with_data_transfer(transfer);
    controller.on_drag_over(&mut over);
    assert_eq!(over.data_transfer.as_ref().unwrap().drop_effect, DropEffect::Move);

    let mut drop = PointerEvent::new(grid.tree.node(grid.cell(15)), pos2(300.0, 300.0));
    let outcome = controller.on_drop(&mut drop).await.unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Updated {
            event_id: event.id.unwrap(),
            update: EventUpdate::date_only(july(15)),
        }
    );
    assert!(!controller.is_dragging());

    let stored = service.get(event.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.date, july(15));
    assert_eq!(stored.start_time, event.start_time);
    assert_eq!(stored.end_time, event.end_time);
    assert!(service.list_for_date(july(10)).unwrap().is_empty());
}

#[tokio::test]
async fn test_drop_onto_event_box_leaves_event_in_place() {
    init_logging();
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    let grid = month_grid();
    let mut controller = DragController::new(service.updater());

    controller.on_drag_start(&event, pos2(0.0, 0.0), None);
    let mut drop = PointerEvent::new(grid.tree.node(grid.event_box), pos2(0.0, 0.0));
    let outcome = controller.on_drop(&mut drop).await.unwrap();

    assert_eq!(outcome, DropOutcome::Rejected(RejectReason::InvalidTarget));
    assert_eq!(service.get(event.id.unwrap()).unwrap(), Some(event));
}

#[tokio::test]
async fn test_drop_on_event_title_uses_enclosing_day() {
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    let grid = month_grid();
    let mut controller = DragController::new(service.updater());

    controller.on_drag_start(&event, pos2(0.0, 0.0), None);
    let mut drop = PointerEvent::new(grid.tree.node(grid.event_title), pos2(0.0, 0.0));
    let outcome = controller.on_drop(&mut drop).await.unwrap();

    // title -> event box -> day 10 cell, within the search depth
    assert_eq!(
        outcome,
        DropOutcome::Updated {
            event_id: event.id.unwrap(),
            update: EventUpdate::date_only(july(10)),
        }
    );
}

#[tokio::test]
async fn test_drag_into_week_slot_moves_date_and_time() {
    init_logging();
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    let grid = week_grid();
    let mut controller = DragController::new(service.updater());

    controller.on_drag_start(&event, pos2(0.0, 0.0), None);
    // column for the 16th, 90px below the top of a 120px slot
    let rect = slot_rect(2);
    let mut drop = PointerEvent::new(
        grid.tree.node(grid.content(16)),
        pos2(rect.center().x, rect.top() + 90.0),
    );
    controller.on_drop(&mut drop).await.unwrap();

    let stored = service.get(event.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.date, july(16));
    assert_eq!(stored.start_time.to_string(), "10:45");
    assert_eq!(stored.end_time.to_string(), "11:45");
    assert_eq!(stored.duration_minutes(), event.duration_minutes());
}

#[tokio::test]
async fn test_drop_directly_on_week_slot() {
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    let grid = week_grid();
    let mut controller = DragController::new(service.updater());

    controller.on_drag_start(&event, pos2(0.0, 0.0), None);
    let rect = slot_rect(6);
    let mut drop = PointerEvent::new(grid.tree.node(grid.slot(20)), rect.left_bottom());
    controller.on_drop(&mut drop).await.unwrap();

    let stored = service.get(event.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.date, july(20));
    assert_eq!(stored.start_time.to_string(), "11:00");
    assert_eq!(stored.end_time.to_string(), "12:00");
}

#[tokio::test]
async fn test_updater_failure_is_reported_and_state_cleared() {
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    service.delete(event.id.unwrap()).unwrap();
    let grid = month_grid();
    let mut controller = DragController::new(service.updater());

    controller.on_drag_start(&event, pos2(0.0, 0.0), None);
    let mut drop = PointerEvent::new(grid.tree.node(grid.cell(20)), pos2(0.0, 0.0));
    let result = controller.on_drop(&mut drop).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(!controller.is_dragging());
}

#[tokio::test]
async fn test_abandoned_drag_issues_no_update() {
    let db = setup_db();
    let service = EventService::new(db.connection());
    let event = seed_event(&service);
    let grid = month_grid();
    let mut controller = DragController::new(service.updater());

    controller.on_drag_start(&event, pos2(0.0, 0.0), None);
    controller.on_drag_end();

    let mut drop = PointerEvent::new(grid.tree.node(grid.cell(20)), pos2(0.0, 0.0));
    let outcome = controller.on_drop(&mut drop).await.unwrap();

    assert_eq!(outcome, DropOutcome::Ignored);
    assert_eq!(service.get(event.id.unwrap()).unwrap().unwrap().date, july(10));
}

#[tokio::test]
async fn test_update_is_issued_exactly_once_per_drop() {
    let grid = month_grid();
    let mut calls = Vec::new();
    {
        let mut controller = DragController::new(|id: i64, update: EventUpdate| {
            calls.push((id, update));
            std::future::ready(Ok::<(), String>(()))
        });
        let event = Event::builder()
            .id(7)
            .title("Review")
            .date(july(3))
            .times("14:00", "15:30")
            .unwrap()
            .build()
            .unwrap();

        controller.on_drag_start(&event, pos2(0.0, 0.0), None);
        let mut drop = PointerEvent::new(grid.tree.node(grid.cell(4)), pos2(0.0, 0.0));
        controller.on_drop(&mut drop).await.unwrap();
        let mut again = PointerEvent::new(grid.tree.node(grid.cell(5)), pos2(0.0, 0.0));
        controller.on_drop(&mut again).await.unwrap();
    }

    assert_eq!(calls, vec![(7, EventUpdate::date_only(july(4)))]);
}
