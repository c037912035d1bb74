#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::Lines;
use tokio::sync::mpsc;

use crate::domain::models::Event;

/// Merges typed lines with backend events into one stream for the console.
pub struct EventsService<R> {
    input: Lines<R>,
    input_open: bool,
    events: mpsc::UnboundedReceiver<Event>,
}

impl<R: AsyncBufRead + Unpin> EventsService<R> {
    pub fn new(input: R, events: mpsc::UnboundedReceiver<Event>) -> EventsService<R> {
        return EventsService {
            input: input.lines(),
            input_open: true,
            events,
        };
    }

    pub fn is_input_open(&self) -> bool {
        return self.input_open;
    }

    /// Next event, or `None` once the actions service has gone away. End of
    /// input is reported once as `Event::InputClosed`, after which only
    /// backend events are returned.
    pub async fn next(&mut self) -> Result<Option<Event>> {
        tokio::select! {
            line = self.input.next_line(), if self.input_open => {
                match line? {
                    Some(text) => return Ok(Some(Event::Input(text))),
                    None => {
                        self.input_open = false;
                        return Ok(Some(Event::InputClosed));
                    }
                }
            }
            event = self.events.recv() => {
                return Ok(event);
            }
        }
    }
}
