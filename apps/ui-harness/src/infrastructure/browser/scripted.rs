//! Scripted in-memory browser.
//!
//! Each locator gets a queue of readings. A read pops the front reading while
//! more than one is queued, so the last reading repeats forever. Reading a
//! locator with nothing scripted fails with `NotFound`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::application::ports::{BrowserError, BrowserPort, Locator};

/// Side effect recorded by [`ScriptedBrowser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// `navigate(url)`.
    Navigate(String),
    /// `fill(locator, value)`.
    Fill {
        /// Target input.
        locator: Locator,
        /// Value typed.
        value: String,
    },
    /// `click(locator)`.
    Click(Locator),
}

#[derive(Debug, Default)]
struct PageScript {
    texts: HashMap<Locator, VecDeque<String>>,
    values: HashMap<Locator, VecDeque<String>>,
    counts: HashMap<Locator, VecDeque<usize>>,
    visible: HashSet<Locator>,
    reveals: HashMap<Locator, Vec<Locator>>,
    failures: HashMap<Locator, VecDeque<BrowserError>>,
    actions: Vec<BrowserAction>,
    current_url: Option<String>,
    reads: usize,
}

/// In-memory [`BrowserPort`] driven by scripted readings.
#[derive(Debug, Default)]
pub struct ScriptedBrowser {
    page: Mutex<PageScript>,
}

impl ScriptedBrowser {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, PageScript> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue text readings for a locator.
    pub fn script_text<I, S>(&self, locator: Locator, readings: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page()
            .texts
            .insert(locator, readings.into_iter().map(Into::into).collect());
        self
    }

    /// Queue input-value readings for a locator.
    pub fn script_value<I, S>(&self, locator: Locator, readings: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page()
            .values
            .insert(locator, readings.into_iter().map(Into::into).collect());
        self
    }

    /// Queue element-count readings for a locator.
    pub fn script_count<I>(&self, locator: Locator, readings: I) -> &Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.page()
            .counts
            .insert(locator, readings.into_iter().collect());
        self
    }

    /// Make an element visible.
    pub fn show(&self, locator: Locator) -> &Self {
        self.page().visible.insert(locator);
        self
    }

    /// Hide an element.
    pub fn hide(&self, locator: &Locator) -> &Self {
        self.page().visible.remove(locator);
        self
    }

    /// Clicking `trigger` makes `target` visible.
    pub fn reveal_on_click(&self, trigger: Locator, target: Locator) -> &Self {
        self.page().reveals.entry(trigger).or_default().push(target);
        self
    }

    /// The next call touching `locator` fails with `error`.
    pub fn fail_next(&self, locator: Locator, error: BrowserError) -> &Self {
        self.page()
            .failures
            .entry(locator)
            .or_default()
            .push_back(error);
        self
    }

    /// Actions performed so far, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<BrowserAction> {
        self.page().actions.clone()
    }

    /// Last URL navigated to.
    #[must_use]
    pub fn current_url(&self) -> Option<String> {
        self.page().current_url.clone()
    }

    /// Number of text, value and count reads served.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.page().reads
    }
}

impl PageScript {
    fn take_failure(&mut self, locator: &Locator) -> Result<(), BrowserError> {
        match self.failures.get_mut(locator).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_reading<T: Clone>(
        queues: &mut HashMap<Locator, VecDeque<T>>,
        locator: &Locator,
    ) -> Result<T, BrowserError> {
        let queue = queues
            .get_mut(locator)
            .ok_or_else(|| BrowserError::NotFound(locator.clone()))?;

        let reading = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        reading.ok_or_else(|| BrowserError::NotFound(locator.clone()))
    }
}

impl BrowserPort for ScriptedBrowser {
    fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        let mut page = self.page();
        page.actions.push(BrowserAction::Navigate(url.to_string()));
        page.current_url = Some(url.to_string());
        Ok(())
    }

    fn wait_for_visible(&self, locator: &Locator, timeout: Duration) -> Result<(), BrowserError> {
        let mut page = self.page();
        page.take_failure(locator)?;
        if page.visible.contains(locator) {
            Ok(())
        } else {
            Err(BrowserError::NotVisible {
                locator: locator.clone(),
                timeout_ms: timeout.as_millis() as u64,
            })
        }
    }

    fn read_text(&self, locator: &Locator) -> Result<String, BrowserError> {
        let mut page = self.page();
        page.take_failure(locator)?;
        page.reads += 1;
        PageScript::next_reading(&mut page.texts, locator)
    }

    fn read_value(&self, locator: &Locator) -> Result<String, BrowserError> {
        let mut page = self.page();
        page.take_failure(locator)?;
        page.reads += 1;
        PageScript::next_reading(&mut page.values, locator)
    }

    fn fill(&self, locator: &Locator, value: &str) -> Result<(), BrowserError> {
        let mut page = self.page();
        page.take_failure(locator)?;
        page.values
            .insert(locator.clone(), VecDeque::from([value.to_string()]));
        page.actions.push(BrowserAction::Fill {
            locator: locator.clone(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn click(&self, locator: &Locator) -> Result<(), BrowserError> {
        let mut page = self.page();
        page.take_failure(locator)?;
        page.actions.push(BrowserAction::Click(locator.clone()));
        if let Some(targets) = page.reveals.get(locator).cloned() {
            page.visible.extend(targets);
        }
        Ok(())
    }

    fn count(&self, locator: &Locator) -> Result<usize, BrowserError> {
        let mut page = self.page();
        page.take_failure(locator)?;
        page.reads += 1;
        Ok(PageScript::next_reading(&mut page.counts, locator).unwrap_or(0))
    }
}
