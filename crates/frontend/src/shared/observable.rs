//! Bridges `contracts` observables into Leptos signals.

use contracts::shared::observable::Observable;
use leptos::prelude::*;

/// Mirror `source` into a signal for the lifetime of the current owner.
///
/// The subscription is stored in the owner's arena and detaches when the
/// component is disposed.
pub fn use_observable<T>(source: Observable<T>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let signal = RwSignal::new(source.get());
    let subscription = source.subscribe(move |value: &T| {
        // the owner may already be gone while the source still notifies
        let _ = signal.try_set(value.clone());
    });
    let _ = StoredValue::new_local(subscription);
    signal.read_only()
}
