//! Skipped fields and unannotated std types need no `Envelope` impl.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use envelope::Envelope;

struct Handle;

#[derive(Clone, Default, Envelope)]
struct Config {
    #[envelope("APP_NAME")]
    name: String,

    timeout: Duration,

    tags: Vec<String>,

    labels: HashMap<String, String>,

    shared: Option<Arc<String>>,

    #[envelope(skip)]
    handle: Option<Arc<Handle>>,
}

fn main() {
    let config: Result<Config, envelope::Error> = envelope::from_env();
    let _ = config.map(|c| (c.name, c.timeout, c.tags, c.labels, c.shared, c.handle.is_some()));
}
