//! Booking Flow Controller
//!
//! Owns the cart, calendar, slots and price book exclusively for the
//! lifetime of one session. Every transition is synchronous and either
//! succeeds or returns a [`FlowError`] leaving the state untouched;
//! upstream fetch failures never reach this type as errors, only as
//! data that has not been loaded yet.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::models::{
    BookingLine, BookingPayload, CatalogItem, DateAvailability, PriceBreakdown, PriceRecord,
    ScheduleResolution, TimeSlot,
};

use crate::calendar::{AvailabilityCalendar, time_slots};
use crate::core::{BookingConfig, FlowError, FlowResult};
use crate::pricing::{Cart, PriceBook, compute_breakdown, per_unit_discount, to_f64};
use crate::schedule::resolve_schedule;

/// Current step of the booking flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    #[default]
    SelectItems,
    PickDate,
    PickSlot,
    ConfirmSchedule,
    Success,
    Cancelled,
}

impl BookingStep {
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStep::Success | BookingStep::Cancelled)
    }
}

/// Step state machine for one booking session
///
/// "today" is fixed from the `now` handed to [`BookingFlow::new`] and
/// never re-read, so every computation in the session is deterministic.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    config: BookingConfig,
    step: BookingStep,
    catalog: Option<Vec<CatalogItem>>,
    price_book: Option<PriceBook>,
    availability_loaded: bool,
    cart: Cart,
    calendar: AvailabilityCalendar,
    slots: Vec<TimeSlot>,
    chosen_date: Option<NaiveDate>,
    chosen_slot: Option<TimeSlot>,
}

impl BookingFlow {
    pub fn new(now: NaiveDateTime, config: BookingConfig) -> Self {
        let calendar = AvailabilityCalendar::new(now.date(), config.booking_window_days);
        let slots = time_slots(&config);
        Self {
            config,
            step: BookingStep::SelectItems,
            catalog: None,
            price_book: None,
            availability_loaded: false,
            cart: Cart::new(),
            calendar,
            slots,
            chosen_date: None,
            chosen_slot: None,
        }
    }

    // ==================== Data Loading ====================

    /// Hand the flow the fetched catalog; may be called in any state
    pub fn load_catalog(&mut self, items: Vec<CatalogItem>) {
        tracing::debug!(items = items.len(), "Catalog loaded");
        self.catalog = Some(items);
    }

    /// Hand the flow the fetched price list
    pub fn load_prices(&mut self, records: Vec<PriceRecord>) {
        let book = PriceBook::build(records);
        tracing::debug!(records = book.len(), "Price records loaded");
        self.price_book = Some(book);
    }

    /// Hand the flow the fetched availability records
    pub fn load_availability(&mut self, records: Vec<DateAvailability>) {
        self.calendar.load(records);
        self.availability_loaded = true;
    }

    // ==================== Accessors ====================

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn is_terminal(&self) -> bool {
        self.step.is_terminal()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn calendar(&self) -> &AvailabilityCalendar {
        &self.calendar
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn chosen_date(&self) -> Option<NaiveDate> {
        self.chosen_date
    }

    pub fn chosen_slot(&self) -> Option<&TimeSlot> {
        self.chosen_slot.as_ref()
    }

    pub fn catalog(&self) -> FlowResult<&[CatalogItem]> {
        self.catalog
            .as_deref()
            .ok_or(FlowError::DataUnavailable { what: "catalog" })
    }

    /// Breakdown of the current cart; recomputed on every call
    pub fn breakdown(&self) -> FlowResult<PriceBreakdown> {
        let book = self
            .price_book
            .as_ref()
            .ok_or(FlowError::DataUnavailable {
                what: "price records",
            })?;
        Ok(compute_breakdown(&self.cart, book, &self.config))
    }

    // ==================== Item Selection ====================

    /// Add one unit of a catalog item to the cart
    pub fn add_item(&mut self, item_id: &str) -> FlowResult<()> {
        self.require_step(BookingStep::SelectItems, "add item")?;
        let item = self
            .catalog()?
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownItem {
                id: item_id.to_string(),
            })?;
        self.cart.add_item(item);
        Ok(())
    }

    /// Adjust a cart line's quantity; zero or below removes the line
    pub fn change_quantity(&mut self, item_id: &str, delta: i32) -> FlowResult<()> {
        self.require_step(BookingStep::SelectItems, "change quantity")?;
        self.cart.change_quantity(item_id, delta);
        Ok(())
    }

    /// Remove a cart line unconditionally
    pub fn remove_item(&mut self, item_id: &str) -> FlowResult<()> {
        self.require_step(BookingStep::SelectItems, "remove item")?;
        self.cart.remove_item(item_id);
        Ok(())
    }

    // ==================== Forward Transitions ====================

    /// SelectItems → PickDate; requires at least one line
    pub fn submit_items(&mut self) -> FlowResult<()> {
        self.require_step(BookingStep::SelectItems, "submit items")?;
        if self.cart.is_empty() {
            return Err(FlowError::EmptySelection);
        }
        tracing::info!(lines = self.cart.line_count(), "Selection submitted");
        self.step = BookingStep::PickDate;
        Ok(())
    }

    /// PickDate → PickSlot; the date must be selectable
    pub fn select_date(&mut self, date: NaiveDate) -> FlowResult<()> {
        self.require_step(BookingStep::PickDate, "select date")?;
        if !self.availability_loaded {
            return Err(FlowError::DataUnavailable {
                what: "availability",
            });
        }
        if !self.calendar.is_selectable(date) {
            return Err(FlowError::DateNotSelectable { date });
        }
        self.chosen_date = Some(date);
        self.step = BookingStep::PickSlot;
        Ok(())
    }

    /// PickSlot → ConfirmSchedule
    ///
    /// Only one slot is active at a time; choosing again replaces the
    /// prior choice.
    pub fn select_slot(&mut self, slot_id: u32) -> FlowResult<()> {
        if !matches!(
            self.step,
            BookingStep::PickSlot | BookingStep::ConfirmSchedule
        ) {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                action: "select slot",
            });
        }
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.id == slot_id)
            .cloned()
            .ok_or(FlowError::UnknownSlot { id: slot_id })?;
        self.chosen_slot = Some(slot);
        self.step = BookingStep::ConfirmSchedule;
        Ok(())
    }

    /// The derived schedule shown on the confirmation screen
    pub fn schedule(&self, now: NaiveDateTime) -> FlowResult<ScheduleResolution> {
        self.require_step(BookingStep::ConfirmSchedule, "resolve schedule")?;
        let (date, slot) = self.chosen()?;
        resolve_schedule(now, date, slot, &self.config)
    }

    /// ConfirmSchedule → Success, emitting the finalized payload
    ///
    /// Nothing is committed externally until this succeeds; cancelling
    /// at any earlier point simply drops the in-memory state.
    pub fn confirm(&mut self, now: NaiveDateTime) -> FlowResult<BookingPayload> {
        self.require_step(BookingStep::ConfirmSchedule, "confirm")?;
        let (date, slot) = self.chosen()?;

        let book = self
            .price_book
            .as_ref()
            .ok_or(FlowError::DataUnavailable {
                what: "price records",
            })?;

        let lines: Vec<BookingLine> = self
            .cart
            .lines()
            .iter()
            .map(|line| {
                let record = book.resolve(&line.item);
                BookingLine {
                    item_id: line.item.id.clone(),
                    name: line.item.name.clone(),
                    quantity: line.quantity,
                    unit_price: record.map(|r| r.full_price).unwrap_or(0.0),
                    unit_discount: record.map(|r| to_f64(per_unit_discount(r))).unwrap_or(0.0),
                }
            })
            .collect();

        let payload = BookingPayload {
            booking_id: Uuid::new_v4(),
            lines,
            breakdown: compute_breakdown(&self.cart, book, &self.config),
            schedule: resolve_schedule(now, date, slot, &self.config)?,
        };

        tracing::info!(
            booking_id = %payload.booking_id,
            final_total = payload.breakdown.final_total,
            "Booking confirmed"
        );
        self.step = BookingStep::Success;
        Ok(payload)
    }

    // ==================== Backward Transitions ====================

    /// Step back, clearing only the choice of the step being left
    ///
    /// Everything entered earlier is preserved: going back from the
    /// slot picker does not touch the cart or the chosen date.
    pub fn back(&mut self) -> FlowResult<()> {
        match self.step {
            BookingStep::ConfirmSchedule => {
                self.chosen_slot = None;
                self.step = BookingStep::PickSlot;
                Ok(())
            }
            BookingStep::PickSlot => {
                self.chosen_date = None;
                self.step = BookingStep::PickDate;
                Ok(())
            }
            BookingStep::PickDate => {
                self.step = BookingStep::SelectItems;
                Ok(())
            }
            _ => Err(FlowError::InvalidTransition {
                from: self.step,
                action: "go back",
            }),
        }
    }

    /// Close the flow from any non-terminal step, discarding all state
    pub fn cancel(&mut self) -> FlowResult<()> {
        if self.is_terminal() {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                action: "cancel",
            });
        }
        tracing::info!(step = ?self.step, "Booking flow cancelled");
        self.step = BookingStep::Cancelled;
        Ok(())
    }

    // ==================== Month Navigation ====================

    pub fn next_month(&mut self) {
        self.calendar.next_month();
    }

    pub fn previous_month(&mut self) {
        self.calendar.previous_month();
    }

    // ==================== Internals ====================

    fn require_step(&self, expected: BookingStep, action: &'static str) -> FlowResult<()> {
        if self.step != expected {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                action,
            });
        }
        Ok(())
    }

    fn chosen(&self) -> FlowResult<(NaiveDate, &TimeSlot)> {
        match (self.chosen_date, self.chosen_slot.as_ref()) {
            (Some(date), Some(slot)) => Ok((date, slot)),
            _ => Err(FlowError::InvalidTransition {
                from: self.step,
                action: "resolve schedule",
            }),
        }
    }
}
