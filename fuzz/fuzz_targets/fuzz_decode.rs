#![no_main]

use envelope::{Decoder, Envelope, MapEnv, Nesting};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Default, Envelope)]
struct Database {
    #[envelope("DATABASE_ADDR,required")]
    addr: String,

    #[envelope("DATABASE_PORT,default:5432")]
    port: i64,
}

#[derive(Clone, Debug, Default, Envelope)]
struct Config {
    #[envelope(embedded)]
    database: Database,

    #[envelope("RATIO")]
    ratio: f64,

    #[envelope("DEBUG")]
    debug: bool,
}

const KEYS: &[&str] = &["DATABASE_ADDR", "DATABASE_PORT", "RATIO", "DEBUG"];

fuzz_target!(|values: Vec<String>| {
    let env: MapEnv = KEYS.iter().copied().zip(values).collect();

    let mut config = Config::default();
    let before = format!("{config:?}");

    match Decoder::new()
        .source(&env)
        .nesting(Nesting::Flattened)
        .decode(&mut config)
    {
        Ok(()) => {}

        Err(err) => {
            // A failed decode leaves the target untouched.
            assert_eq!(format!("{config:?}"), before);
            assert!(!err.errors().is_empty());
            let _ = err.to_string();
        }
    }
});
