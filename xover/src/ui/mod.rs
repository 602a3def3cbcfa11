//! Interactive UI plumbing
//!
//! Input arrives as already-debounced discrete events; output is plain
//! display lines. The [`Navigator`] owns a page stack and hands each
//! event to the active page, popping the stack when a `back` event goes
//! unhandled. Exactly one event is dispatched at a time; handlers run
//! to completion, which is what makes the pages' interior state safe
//! without locks.

use async_trait::async_trait;

pub mod crossover_page;
pub use crossover_page::CrossoverPage;

/// Column width of the target character display.
pub const DISPLAY_COLUMNS: usize = 16;

/// A debounced input event from the rotary encoder or back button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum UserEvent {
    Left,
    Right,
    Click,
    Back,
}

/// One screen of the UI.
#[async_trait]
pub trait Page: Send {
    /// Title shown in menus.
    fn title(&self) -> &str;

    /// Handles a single event, returning `false` when the event was
    /// not consumed so the navigator can act on it instead.
    async fn handle(&mut self, event: UserEvent) -> bool;

    /// Renders the page as display lines, already truncated to
    /// [`DISPLAY_COLUMNS`].
    fn render(&self) -> Vec<String>;
}

/// Page stack driving the active [`Page`] from the event loop.
pub struct Navigator {
    stack: Vec<Box<dyn Page>>,
}

impl Navigator {
    pub fn new(root: Box<dyn Page>) -> Self {
        Self { stack: vec![root] }
    }

    pub fn push(&mut self, page: Box<dyn Page>) {
        self.stack.push(page);
    }

    /// Dispatches one event to the active page. An unhandled `back`
    /// pops the stack. Returns `false` once no page is left.
    pub async fn dispatch(&mut self, event: UserEvent) -> bool {
        let Some(page) = self.stack.last_mut() else {
            return false;
        };

        let handled = page.handle(event).await;
        if !handled && event == UserEvent::Back {
            self.stack.pop();
        }

        !self.stack.is_empty()
    }

    pub fn render(&self) -> Vec<String> {
        self.stack
            .last()
            .map(|page| page.render())
            .unwrap_or_default()
    }
}
