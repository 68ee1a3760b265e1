//! Nested structures, annotated as embedded or left bare.

use envelope::{Decoder, Envelope, MapEnv, Nesting};

#[derive(Clone, Default, Envelope)]
struct Database {
    #[envelope("DATABASE_ADDR,required")]
    addr: String,
}

#[derive(Clone, Default, Envelope)]
struct Cache {
    #[envelope("CACHE_TTL,default:60")]
    ttl: i64,
}

#[derive(Clone, Default, Envelope)]
struct Config {
    #[envelope(embedded)]
    database: Database,

    cache: Cache,
}

fn main() {
    let env = MapEnv::new().with("DATABASE_ADDR", "localhost");
    let config: Result<Config, envelope::Error> = Decoder::new()
        .source(&env)
        .nesting(Nesting::Flattened)
        .load();
    let _ = config.map(|c| (c.database.addr, c.cache.ttl));
}
