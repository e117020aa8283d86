//! Button edges passed from interrupt handlers to the control loop.
//!
//! Interrupt handlers own the `Producer` half of the queue and never touch
//! the controller. The control loop owns the `Consumer` half and hands it to
//! `Tracker::drain`.

use heapless::spsc::{Consumer, Producer, Queue};

use crate::input::{Button, Edge};
use crate::log;

/// Holds one item less than its size.
pub const EVENT_QUEUE_SIZE: usize = 8;

pub type EventQueue = Queue<Event, EVENT_QUEUE_SIZE>;
pub type EventProducer<'a> = Producer<'a, Event, EVENT_QUEUE_SIZE>;
pub type EventConsumer<'a> = Consumer<'a, Event, EVENT_QUEUE_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    pub button: Button,
    pub edge: Edge,
}

impl Event {
    pub fn pushed(button: Button) -> Self {
        Self {
            button,
            edge: Edge::Pushed,
        }
    }

    pub fn released(button: Button) -> Self {
        Self {
            button,
            edge: Edge::Released,
        }
    }
}

/// Enqueue the event, handing it back if the queue is full.
pub fn report(producer: &mut EventProducer<'_>, event: Event) -> Result<(), Event> {
    producer.enqueue(event).map_err(|event| {
        log::warning!("Event queue is full, dropping {:?}", event);
        event
    })
}
