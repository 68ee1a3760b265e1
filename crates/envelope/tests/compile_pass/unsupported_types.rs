//! Annotated fields of non-convertible types compile and fail at runtime.

use envelope::{Envelope, Kind, Shape};

#[derive(Clone, Default, Envelope)]
struct Config {
    #[envelope("APP_PORT,default:80")]
    port: u16,

    #[envelope("APP_HOSTS")]
    hosts: Vec<String>,
}

fn main() {
    let config = Config::default();
    assert_eq!(
        config.fields()[0].shape,
        Shape::Leaf(Kind::Unsupported("u16"))
    );
    let _ = (config.port, &config.hosts);
}
