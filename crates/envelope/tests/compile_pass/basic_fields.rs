//! Every convertible leaf type, with and without modifiers.

use envelope::Envelope;

#[derive(Clone, Default, Envelope)]
struct Config {
    /// Service name
    #[envelope("APP_NAME,required")]
    name: String,

    #[envelope("APP_PORT,default:8080")]
    port: i64,

    #[envelope("APP_RATIO")]
    ratio: f64,

    #[envelope("APP_DEBUG,default:false")]
    debug: bool,

    #[envelope("")]
    unnamed: String,
}

fn main() {
    let mut config = Config::default();
    let _ = envelope::decode(&mut config);
    let _ = envelope::env_example::<Config>();
    let _ = (&config.name, config.port, config.ratio, config.debug, &config.unnamed);
}
