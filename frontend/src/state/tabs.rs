use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
    Error(String),
}

/// Identifies one fetch. Only the latest ticket of the active tab may be
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket<K> {
    pub tab: K,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSwitch<K> {
    /// Filters and pagination must be reset.
    pub changed: bool,
    pub fetch: Option<FetchTicket<K>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCompletion {
    Applied,
    /// `notify` is false when this message was already shown for the tab.
    Failed { notify: bool },
    Stale,
}

#[derive(Debug, Clone)]
pub struct TabController<K: Copy + Eq + Hash> {
    active: K,
    states: HashMap<K, LoadState>,
    latest: HashMap<K, u64>,
    reported: HashMap<K, HashSet<String>>,
    next_seq: u64,
}

impl<K: Copy + Eq + Hash> TabController<K> {
    /// The default tab starts loading immediately; the returned ticket is its
    /// fetch.
    pub fn new(tabs: &[K], default: K) -> (Self, FetchTicket<K>) {
        let mut states: HashMap<K, LoadState> = tabs
            .iter()
            .map(|tab| (*tab, LoadState::NotLoaded))
            .collect();
        states.insert(default, LoadState::NotLoaded);
        let mut controller = Self {
            active: default,
            states,
            latest: HashMap::new(),
            reported: HashMap::new(),
            next_seq: 0,
        };
        let ticket = controller.issue(default);
        (controller, ticket)
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn state(&self, tab: K) -> LoadState {
        self.states.get(&tab).cloned().unwrap_or(LoadState::NotLoaded)
    }

    pub fn is_loading(&self, tab: K) -> bool {
        self.state(tab) == LoadState::Loading
    }

    fn issue(&mut self, tab: K) -> FetchTicket<K> {
        self.next_seq += 1;
        self.latest.insert(tab, self.next_seq);
        self.states.insert(tab, LoadState::Loading);
        FetchTicket {
            tab,
            seq: self.next_seq,
        }
    }

    /// Loaded tabs reuse their cache, Loading tabs never double-fire, and
    /// NotLoaded or Error tabs fetch on selection.
    pub fn select(&mut self, tab: K) -> TabSwitch<K> {
        if tab == self.active {
            return TabSwitch {
                changed: false,
                fetch: None,
            };
        }
        self.active = tab;
        let fetch = match self.state(tab) {
            LoadState::NotLoaded | LoadState::Error(_) => Some(self.issue(tab)),
            LoadState::Loading | LoadState::Loaded => None,
        };
        TabSwitch {
            changed: true,
            fetch,
        }
    }

    /// Explicit refetch after a successful mutation; supersedes any fetch in
    /// flight for the tab.
    pub fn refresh(&mut self, tab: K) -> FetchTicket<K> {
        self.issue(tab)
    }

    pub fn is_current(&self, ticket: &FetchTicket<K>) -> bool {
        ticket.tab == self.active && self.latest.get(&ticket.tab) == Some(&ticket.seq)
    }

    /// Applies the outcome of a fetch, or discards it when the ticket was
    /// superseded or the user has moved to another tab.
    pub fn complete(
        &mut self,
        ticket: FetchTicket<K>,
        outcome: Result<(), String>,
    ) -> FetchCompletion {
        if !self.is_current(&ticket) {
            if self.latest.get(&ticket.tab) == Some(&ticket.seq)
                && self.state(ticket.tab) == LoadState::Loading
            {
                self.states.insert(ticket.tab, LoadState::NotLoaded);
            }
            return FetchCompletion::Stale;
        }
        match outcome {
            Ok(()) => {
                self.states.insert(ticket.tab, LoadState::Loaded);
                FetchCompletion::Applied
            }
            Err(message) => {
                let notify = self
                    .reported
                    .entry(ticket.tab)
                    .or_default()
                    .insert(message.clone());
                self.states.insert(ticket.tab, LoadState::Error(message));
                FetchCompletion::Failed { notify }
            }
        }
    }
}
