//! Control Binding
//!
//! Decides which activated elements count as delete controls and which
//! locator each one targets.

use crate::config::BindingMode;
use crate::error::BindError;
use crate::locator::ResourceLocator;

/// An element of the host page that may act as a delete control.
pub trait DeleteControl {
    /// Raw value of the locator attribute, if present.
    fn locator_attribute(&self) -> Option<String>;
    /// Short description for diagnostics.
    fn describe(&self) -> String;
}

/// Outcome of binding: either a fixed snapshot of controls or a delegate
/// covering any control. Locators are always read at click time.
#[derive(Debug, Clone)]
pub enum BoundControls<C> {
    Static(Vec<C>),
    Delegated,
}

/// Walk from `start` up through its ancestors and return the first node
/// accepted by `matches`, like `Element.closest`.
pub fn closest<N>(
    start: N,
    parent: impl Fn(&N) -> Option<N>,
    matches: impl Fn(&N) -> bool,
) -> Option<N> {
    let mut node = Some(start);
    while let Some(current) = node {
        if matches(&current) {
            return Some(current);
        }
        node = parent(&current);
    }
    None
}

fn read_locator<C: DeleteControl>(control: &C) -> Option<ResourceLocator> {
    match ResourceLocator::from_attribute(control.locator_attribute().as_deref()) {
        Ok(locator) => Some(locator),
        Err(err) => {
            log::warn!("[BIND] ignoring {}: {}", control.describe(), err);
            None
        }
    }
}

/// Bind every control present right now.
///
/// In static mode a control without a usable locator aborts the whole bind;
/// delegated mode postpones validation to each click.
pub fn bind<C, I>(mode: BindingMode, controls: I) -> Result<BoundControls<C>, BindError>
where
    C: DeleteControl,
    I: IntoIterator<Item = C>,
{
    match mode {
        BindingMode::Static => {
            let mut bound = Vec::new();
            for control in controls {
                // Validated now, read again on every click.
                ResourceLocator::from_attribute(control.locator_attribute().as_deref())
                    .map_err(|err| err.for_control(control.describe()))?;
                bound.push(control);
            }
            log::info!("[BIND] {} delete controls bound", bound.len());
            Ok(BoundControls::Static(bound))
        }
        BindingMode::Delegated => {
            log::info!("[BIND] delegating delete handling to container");
            Ok(BoundControls::Delegated)
        }
    }
}

impl<C> BoundControls<C>
where
    C: DeleteControl + PartialEq,
{
    /// Locator to delete when `control` is activated, or `None` when the
    /// activation must be ignored. The attribute is re-read on every call.
    pub fn resolve(&self, control: &C) -> Option<ResourceLocator> {
        match self {
            BoundControls::Static(bound) => {
                if bound.iter().any(|known| known == control) {
                    read_locator(control)
                } else {
                    None
                }
            }
            BoundControls::Delegated => read_locator(control),
        }
    }

    pub fn controls(&self) -> impl Iterator<Item = &C> {
        let bound: &[C] = match self {
            BoundControls::Static(bound) => bound,
            BoundControls::Delegated => &[],
        };
        bound.iter()
    }

    pub fn len(&self) -> usize {
        match self {
            BoundControls::Static(bound) => bound.len(),
            BoundControls::Delegated => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
