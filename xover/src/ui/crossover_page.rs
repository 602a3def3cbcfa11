//! Crossover edit page
//!
//! The page cycles between two modes. Idle: the cursor moves over the
//! filter-edge slots (low and high cutoff of every channel). Editing:
//! one slot is selected, turns adjust a staged copy of the
//! frequencies, a click commits the owning band to the device and
//! persists it, and back discards the staging area.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    settings::{self, SavedState, SettingsStore},
    ui::{Page, UserEvent, DISPLAY_COLUMNS},
    Crossover, CutoffPair, Result,
};

/// Step below the breakpoint, in Hz.
const STEP_FINE: f64 = 10.0;
/// Step at or above the breakpoint.
const STEP_COARSE: f64 = 100.0;
const STEP_BREAKPOINT: f64 = 1000.0;

/// Floor for staged frequencies; keeps the filter math out of the
/// degenerate non-positive range.
const MIN_CUTOFF: f64 = 10.0;

struct EditSession {
    selected: usize,
    staged: Vec<f64>,
}

/// Interactive edit state machine for one crossover instance.
///
/// Owns the cursor, the committed-frequency cache and the transient
/// edit session. All device and store traffic goes through
/// [`Crossover`] and [`SettingsStore`]; errors are rendered, never
/// propagated into the event loop.
pub struct CrossoverPage {
    dsp: Crossover<'static>,
    store: Arc<dyn SettingsStore>,

    cursor: usize,
    /// Last committed cutoffs, two entries (low, high) per channel.
    committed: Vec<f64>,
    session: Option<EditSession>,
    /// Channels whose last device write failed.
    faulted: Vec<bool>,
}

impl CrossoverPage {
    /// Builds the page, restoring persisted cutoffs (or writing and
    /// persisting the compiled-in defaults on first boot) and applying
    /// them to the device. Parameter RAM is volatile, so the apply
    /// happens on every boot.
    pub async fn new(dsp: Crossover<'static>, store: Arc<dyn SettingsStore>) -> Result<Self> {
        let name = dsp.device.product_name;
        let saved = settings::load_state(store.as_ref(), name);
        let first_boot = saved.is_none();
        let saved = saved.unwrap_or_default();

        let mut committed = Vec::with_capacity(dsp.device.channels.len() * 2);
        for (index, spec) in dsp.device.channels.iter().enumerate() {
            let pair = saved
                .get(&spec.band.to_string())
                .copied()
                .unwrap_or(CutoffPair::new(spec.default_low, spec.default_high));

            dsp.channel(index)?.set_cutoffs(pair.low, pair.high).await?;
            committed.push(pair.low);
            committed.push(pair.high);
        }

        let channels = dsp.device.channels.len();
        let page = Self {
            dsp,
            store,
            cursor: 0,
            committed,
            session: None,
            faulted: vec![false; channels],
        };

        if first_boot {
            if let Err(e) = page.persist() {
                log::warn!("default cutoffs not persisted: {}", e);
            }
        }

        Ok(page)
    }

    fn slot_count(&self) -> usize {
        self.committed.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected slot while editing, `None` in idle.
    pub fn selected(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.selected)
    }

    pub fn staged(&self) -> Option<&[f64]> {
        self.session.as_ref().map(|s| s.staged.as_slice())
    }

    pub fn committed(&self) -> &[f64] {
        &self.committed
    }

    fn saved_state(&self) -> SavedState {
        self.dsp
            .device
            .channels
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                (
                    spec.band.to_string(),
                    CutoffPair::new(self.committed[index * 2], self.committed[index * 2 + 1]),
                )
            })
            .collect()
    }

    fn persist(&self) -> Result<()> {
        settings::save_state(
            self.store.as_ref(),
            self.dsp.device.product_name,
            &self.saved_state(),
        )
    }

    fn handle_idle(&mut self, event: UserEvent) -> bool {
        let slots = self.slot_count();
        match event {
            UserEvent::Left => {
                self.cursor = (self.cursor + slots - 1) % slots;
                true
            }
            UserEvent::Right => {
                self.cursor = (self.cursor + 1) % slots;
                true
            }
            UserEvent::Click => {
                self.session = Some(EditSession {
                    selected: self.cursor,
                    staged: self.committed.clone(),
                });
                true
            }
            // Not ours; the navigator pops back to the previous page.
            UserEvent::Back => false,
        }
    }

    fn adjust(&mut self, direction: f64) {
        if let Some(session) = self.session.as_mut() {
            let value = &mut session.staged[session.selected];
            let step = if *value < STEP_BREAKPOINT {
                STEP_FINE
            } else {
                STEP_COARSE
            };
            *value = (*value + direction * step).max(MIN_CUTOFF);
        }
    }

    /// Writes the staged pair owning the selected slot to the device,
    /// refreshes the committed cache and persists it. The session ends
    /// only when the device write succeeds.
    async fn commit(&mut self) -> Result<()> {
        let (channel, low, high) = match self.session.as_ref() {
            Some(session) => {
                let channel = session.selected / 2;
                (
                    channel,
                    session.staged[channel * 2],
                    session.staged[channel * 2 + 1],
                )
            }
            None => return Ok(()),
        };

        // Slots are derived from the device spec, so a missing channel
        // here is a wiring bug, not a runtime condition.
        let band = match self.dsp.channel(channel) {
            Ok(band) => band,
            Err(e) => panic!("edit slot maps to no configured band: {}", e),
        };
        band.set_cutoffs(low, high).await?;

        self.committed[channel * 2] = low;
        self.committed[channel * 2 + 1] = high;
        self.faulted[channel] = false;
        self.session = None;

        // Device registers hold the truth at this point; a failed save
        // costs persistence across reboot, not correctness.
        if let Err(e) = self.persist() {
            log::warn!("committed cutoffs not persisted: {}", e);
        }
        Ok(())
    }

    fn render_line(&self, index: usize) -> String {
        let spec = &self.dsp.device.channels[index];
        if self.faulted[index] {
            return format!("{}: error", spec.label);
        }

        let values = self
            .session
            .as_ref()
            .map(|s| s.staged.as_slice())
            .unwrap_or(&self.committed);

        let mut low = format_frequency(values[index * 2]);
        let mut high = format_frequency(values[index * 2 + 1]);
        if self.cursor == index * 2 {
            low.insert(0, '>');
        } else if self.cursor == index * 2 + 1 {
            high.insert(0, '>');
        }

        let line = format!("{}: {}-{}", spec.label, low, high);
        line.chars().take(DISPLAY_COLUMNS).collect()
    }
}

#[async_trait]
impl Page for CrossoverPage {
    fn title(&self) -> &str {
        self.dsp.device.product_name
    }

    async fn handle(&mut self, event: UserEvent) -> bool {
        if self.session.is_none() {
            return self.handle_idle(event);
        }

        match event {
            UserEvent::Left => self.adjust(-1.0),
            UserEvent::Right => self.adjust(1.0),
            UserEvent::Back => self.session = None,
            UserEvent::Click => {
                // Keep the session on failure so the operator can
                // retry or back out explicitly.
                if let Err(e) = self.commit().await {
                    log::error!("failed to commit cutoffs: {}", e);
                    if let Some(session) = self.session.as_ref() {
                        self.faulted[session.selected / 2] = true;
                    }
                }
            }
        }
        true
    }

    fn render(&self) -> Vec<String> {
        (0..self.dsp.device.channels.len())
            .map(|index| self.render_line(index))
            .collect()
    }
}

/// Abbreviates a frequency for the character display: 100 -> "100",
/// 2500 -> "2.5k".
fn format_frequency(freq: f64) -> String {
    if freq >= 1000.0 {
        format!("{:.1}k", freq / 1000.0)
    } else {
        format!("{:.0}", freq)
    }
}

#[cfg(test)]
mod test {
    use super::format_frequency;

    #[test]
    fn frequency_abbreviation() {
        assert_eq!(format_frequency(100.0), "100");
        assert_eq!(format_frequency(999.0), "999");
        assert_eq!(format_frequency(1000.0), "1.0k");
        assert_eq!(format_frequency(2500.0), "2.5k");
        assert_eq!(format_frequency(10_000.0), "10.0k");
    }
}
