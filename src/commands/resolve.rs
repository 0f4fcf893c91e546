use log::debug;

use crate::platform::{SignalSource, Signals};
use crate::router::primary_label;

/// Print the platform the given signals resolve to
#[tracing::instrument(skip(source))]
pub fn resolve<S: SignalSource + ?Sized>(source: &S) {
    let Signals {
        platform,
        user_agent,
    } = source.signals();
    debug!("Resolving platform={:?} user_agent={:?}", platform, user_agent);

    let resolved = crate::platform::resolve(&platform, &user_agent);
    println!("{}", resolved);
    println!("{}", primary_label(resolved));
}
