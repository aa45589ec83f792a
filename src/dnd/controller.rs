// Drag interaction controller
//
// Sequences one drag gesture: drag-start captures the event, drag-over keeps
// the drop enabled, drop resolves the new date/time and asks the updater to
// persist it, drag-end abandons the gesture. State always returns to idle.

use std::future::Future;

use egui::Pos2;

use super::payload::{DataTransfer, DropEffect, EventUpdate, PointerEvent, EVENT_JSON};
use super::resolve::{
    closest_time_slot, compute_new_date, compute_new_time, drop_offset_in,
    is_valid_drop_target_within, resolve_drop_date_within, shift_end_time,
};
use super::tree::DropNode;
use crate::models::event::Event;
use crate::models::settings::DragSettings;

/// Persists the changes computed by a drop.
///
/// Implemented for any `FnMut(i64, EventUpdate) -> impl Future<Output = Result<(), E>>`.
pub trait EventUpdater {
    type Error;

    fn update_event(
        &mut self,
        event_id: i64,
        update: EventUpdate,
    ) -> impl Future<Output = Result<(), Self::Error>>;
}

impl<F, Fut, E> EventUpdater for F
where
    F: FnMut(i64, EventUpdate) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    type Error = E;

    fn update_event(
        &mut self,
        event_id: i64,
        update: EventUpdate,
    ) -> impl Future<Output = Result<(), Self::Error>> {
        self(event_id, update)
    }
}

/// Transient state of the current gesture, readable by the render layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
    dragged_event: Option<Event>,
    is_dragging: bool,
}

impl DragState {
    pub fn dragged_event(&self) -> Option<&Event> {
        self.dragged_event.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

/// Why a drop did not produce an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing under the pointer, an event box, or no date nearby.
    InvalidTarget,
}

/// Result of [`DragController::on_drop`].
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    /// No drag was in progress.
    Ignored,
    Rejected(RejectReason),
    /// The updater accepted `update` for `event_id`.
    Updated { event_id: i64, update: EventUpdate },
}

pub struct DragController<U> {
    updater: U,
    settings: DragSettings,
    state: DragState,
    drag_anchor: Option<Pos2>,
}

impl<U: EventUpdater> DragController<U> {
    pub fn new(updater: U) -> Self {
        Self::with_settings(updater, DragSettings::default())
    }

    /// Settings that fail [`DragSettings::validate`] are replaced by the
    /// defaults.
    pub fn with_settings(updater: U, settings: DragSettings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("Invalid drag settings ({}), using defaults", e);
                DragSettings::default()
            }
        };
        Self {
            updater,
            settings,
            state: DragState::default(),
            drag_anchor: None,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Pointer position recorded when the current drag started.
    pub fn drag_anchor(&self) -> Option<Pos2> {
        self.drag_anchor
    }

    pub fn settings(&self) -> &DragSettings {
        &self.settings
    }

    /// Begin dragging `event`. Events that were never persisted (no id)
    /// cannot be rescheduled and leave the controller idle.
    pub fn on_drag_start(
        &mut self,
        event: &Event,
        pointer: Pos2,
        data_transfer: Option<&mut DataTransfer>,
    ) -> bool {
        let Some(event_id) = event.id else {
            log::warn!("Ignoring drag of unsaved event '{}'", event.title);
            return false;
        };

        self.state = DragState {
            dragged_event: Some(event.clone()),
            is_dragging: true,
        };
        self.drag_anchor = Some(pointer);

        if let Some(transfer) = data_transfer {
            transfer.effect_allowed = DropEffect::Move;
            transfer.set_data(self.settings.transfer_format.clone(), event_id.to_string());
            if self.settings.attach_event_json {
                match serde_json::to_string(event) {
                    Ok(json) => transfer.set_data(EVENT_JSON, json),
                    Err(e) => log::warn!("Failed to serialize dragged event {}: {}", event_id, e),
                }
            }
        }

        log::debug!(
            "Drag started: event_id={}, date={}, {}-{}",
            event_id,
            event.date,
            event.start_time,
            event.end_time
        );
        true
    }

    /// Keep the pointer's current position eligible as a move target.
    pub fn on_drag_over<N>(&self, pointer_event: &mut PointerEvent<N>) {
        pointer_event.prevent_default();
        pointer_event.stop_propagation();
        if let Some(transfer) = pointer_event.data_transfer.as_mut() {
            transfer.drop_effect = DropEffect::Move;
        }
    }

    /// Finish the gesture at the pointer's position.
    ///
    /// Issues at most one update. The controller is idle again when this
    /// returns, including when the updater fails; its error is returned as is.
    pub async fn on_drop<N>(
        &mut self,
        pointer_event: &mut PointerEvent<N>,
    ) -> Result<DropOutcome, U::Error>
    where
        N: DropNode + Clone,
    {
        pointer_event.prevent_default();
        pointer_event.stop_propagation();

        let Some(event) = self.state.dragged_event.clone() else {
            return Ok(DropOutcome::Ignored);
        };
        let Some(event_id) = event.id else {
            self.reset();
            return Ok(DropOutcome::Ignored);
        };

        let depth = self.settings.date_search_depth;
        let target = pointer_event.target.clone();

        if !is_valid_drop_target_within(target.clone(), depth) {
            log::debug!("Drop of event {} rejected: invalid target", event_id);
            self.reset();
            return Ok(DropOutcome::Rejected(RejectReason::InvalidTarget));
        }

        let date = compute_new_date(&event, resolve_drop_date_within(target.clone(), depth));

        let cell = target
            .and_then(closest_time_slot)
            .and_then(|slot| slot.bounds());

        let update = match cell {
            Some(rect) => {
                let offset = drop_offset_in(pointer_event.position, rect);
                let start_time =
                    compute_new_time(offset, rect.height(), event.start_time, event.end_time);
                let end_time = shift_end_time(start_time, event.start_time, event.end_time);
                if !end_time.is_within_day() {
                    log::warn!(
                        "Event {} dropped to end at {}, past the end of {}",
                        event_id,
                        end_time,
                        date
                    );
                }
                EventUpdate::with_times(date, start_time, end_time)
            }
            None => EventUpdate::date_only(date),
        };

        log::info!("Rescheduling event {}: {:?}", event_id, update);
        let result = self.updater.update_event(event_id, update.clone()).await;
        self.reset();
        result?;

        Ok(DropOutcome::Updated { event_id, update })
    }

    /// Abandon the current gesture without a drop.
    pub fn on_drag_end(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = DragState::default();
        self.drag_anchor = None;
    }
}
