//! Performance benchmarks for envelope decoding.
//!
//! Run with: `cargo bench -p envelope`

#![allow(clippy::struct_field_names)]

use envelope::{ConfigSources, Decoder, Envelope, MapEnv, Nesting};

fn main() {
    setup_env();
    divan::main();
}

fn setup_env() {
    unsafe {
        std::env::set_var("SMALL_HOST", "localhost");
        std::env::set_var("SMALL_PORT", "8080");
        std::env::set_var("SMALL_DEBUG", "true");

        std::env::set_var("NEST_APP_NAME", "myapp");
        std::env::set_var("NEST_DB_HOST", "db.example.com");
        std::env::set_var("NEST_DB_PORT", "5432");
        std::env::set_var("NEST_CACHE_HOST", "cache.example.com");
        std::env::set_var("NEST_CACHE_RATIO", "0.25");
    }
}

// ============================================================================
// Small Config (3 fields)
// ============================================================================

#[derive(Clone, Default, Envelope)]
struct SmallConfig {
    #[envelope("SMALL_HOST,default:localhost")]
    host: String,

    #[envelope("SMALL_PORT,required")]
    port: i64,

    #[envelope("SMALL_DEBUG")]
    debug: bool,
}

#[divan::bench]
fn small_config_from_env() -> SmallConfig {
    envelope::from_env().unwrap()
}

#[divan::bench]
fn small_config_decode_in_place(bencher: divan::Bencher) {
    let mut config = SmallConfig::default();
    bencher.bench_local(|| envelope::decode(&mut config).unwrap());
}

// ============================================================================
// Nested Config
// ============================================================================

#[derive(Clone, Default, Envelope)]
struct DatabaseConfig {
    #[envelope("NEST_DB_HOST,required")]
    host: String,

    #[envelope("NEST_DB_PORT,default:5432")]
    port: i64,
}

#[derive(Clone, Default, Envelope)]
struct CacheConfig {
    #[envelope("NEST_CACHE_HOST,required")]
    host: String,

    #[envelope("NEST_CACHE_RATIO,default:0.5")]
    ratio: f64,
}

#[derive(Clone, Default, Envelope)]
struct NestedConfig {
    #[envelope("NEST_APP_NAME,required")]
    name: String,

    #[envelope(embedded)]
    database: DatabaseConfig,

    cache: CacheConfig,
}

#[divan::bench]
fn nested_config_from_env() -> NestedConfig {
    envelope::from_env().unwrap()
}

#[divan::bench]
fn nested_config_with_sources() -> ConfigSources {
    let mut config = NestedConfig::default();
    Decoder::new()
        .nesting(Nesting::Flattened)
        .decode_with_sources(&mut config)
        .unwrap()
}

#[divan::bench]
fn nested_config_from_map(bencher: divan::Bencher) {
    let env = MapEnv::new()
        .with("NEST_APP_NAME", "myapp")
        .with("NEST_DB_HOST", "db.example.com")
        .with("NEST_CACHE_HOST", "cache.example.com");
    let decoder = Decoder::new().source(&env);

    bencher.bench_local(|| decoder.load::<NestedConfig>().unwrap());
}

// ============================================================================
// Failure Path
// ============================================================================

#[divan::bench]
fn missing_fields_error(bencher: divan::Bencher) {
    let decoder = Decoder::new().source(MapEnv::new());

    bencher.bench_local(|| decoder.load::<NestedConfig>().unwrap_err());
}

#[divan::bench]
fn env_example_render() -> String {
    envelope::env_example::<NestedConfig>()
}
