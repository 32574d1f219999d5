//! Reactive binder: routes selection events to the views that depend on them.
//!
//! Each panel subscribes to one or more event channels with a pure handler
//! computing its view from `(dataset, selection)`. The binder owns the only
//! mutable state, the current [`SelectionState`], and processes one event at
//! a time: apply it, recompute every subscribed view, hand the results to the
//! renderer, return to idle.

use log::debug;

use super::pie::compute_pie_view;
use super::renderer::{PanelId, ViewModel, ViewRenderer};
use super::scatter::compute_scatter_view;
use crate::models::{EventChannel, LaunchDataset, SelectionEvent, SelectionState, SharedDataset};

/// Pure view computation for one panel.
pub type ViewHandler = fn(&LaunchDataset, &SelectionState) -> ViewModel;

/// A panel's dependency on a set of event channels.
#[derive(Clone, Copy)]
pub struct Subscription {
    pub panel: PanelId,
    pub channels: &'static [EventChannel],
    pub handler: ViewHandler,
}

impl Subscription {
    pub fn listens_to(&self, channel: EventChannel) -> bool {
        self.channels.contains(&channel)
    }
}

fn pie_handler(dataset: &LaunchDataset, state: &SelectionState) -> ViewModel {
    ViewModel::Pie(compute_pie_view(dataset, &state.selected_site))
}

fn scatter_handler(dataset: &LaunchDataset, state: &SelectionState) -> ViewModel {
    ViewModel::Scatter(compute_scatter_view(
        dataset,
        &state.selected_site,
        state.payload_range,
    ))
}

/// The pie depends on the site only; the scatter on both controls.
pub const DASHBOARD_SUBSCRIPTIONS: &[Subscription] = &[
    Subscription {
        panel: PanelId::SuccessPieChart,
        channels: &[EventChannel::SiteDropdown],
        handler: pie_handler,
    },
    Subscription {
        panel: PanelId::SuccessPayloadScatterChart,
        channels: &[EventChannel::SiteDropdown, EventChannel::PayloadSlider],
        handler: scatter_handler,
    },
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinderPhase {
    Idle,
    Recomputing,
}

pub struct ReactiveBinder<R: ViewRenderer> {
    dataset: SharedDataset,
    state: SelectionState,
    renderer: R,
    phase: BinderPhase,
    subscriptions: &'static [Subscription],
}

impl<R: ViewRenderer> ReactiveBinder<R> {
    /// Bind a renderer to the dashboard with the default selection.
    pub fn new(dataset: SharedDataset, renderer: R) -> Self {
        let state = SelectionState::initial(&dataset);
        Self::with_state(dataset, state, renderer)
    }

    pub fn with_state(dataset: SharedDataset, state: SelectionState, renderer: R) -> Self {
        Self {
            dataset,
            state,
            renderer,
            phase: BinderPhase::Idle,
            subscriptions: DASHBOARD_SUBSCRIPTIONS,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn phase(&self) -> BinderPhase {
        self.phase
    }

    pub fn dataset(&self) -> &SharedDataset {
        &self.dataset
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Compute and dispatch every panel from the current selection.
    pub fn render_all(&mut self) -> Vec<PanelId> {
        let subscriptions = self.subscriptions;
        self.recompute(subscriptions.iter())
    }

    /// Process one selection event and return the panels that were updated.
    pub fn handle(&mut self, event: SelectionEvent) -> Vec<PanelId> {
        let channel = event.channel();
        debug!("Handling {} event: {:?}", channel.as_str(), event);

        self.state.apply(&event);
        let subscriptions = self.subscriptions;
        self.recompute(subscriptions.iter().filter(|s| s.listens_to(channel)))
    }

    fn recompute<'a>(
        &mut self,
        subscriptions: impl Iterator<Item = &'a Subscription>,
    ) -> Vec<PanelId> {
        self.phase = BinderPhase::Recomputing;

        let mut updated = Vec::new();
        for subscription in subscriptions {
            let view = (subscription.handler)(self.dataset.as_ref(), &self.state);
            self.renderer.render(subscription.panel, view);
            updated.push(subscription.panel);
        }

        self.phase = BinderPhase::Idle;
        updated
    }
}
