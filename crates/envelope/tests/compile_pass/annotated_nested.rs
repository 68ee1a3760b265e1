//! A struct-typed field with an annotation still requires `Envelope`.

use envelope::Envelope;

#[derive(Clone, Default, Envelope)]
struct Database {
    #[envelope("DB_HOST,required")]
    host: String,
}

#[derive(Clone, Default, Envelope)]
struct Config {
    #[envelope("DB,required")]
    database: Database,
}

fn main() {
    let mut config = Config::default();
    let _ = envelope::decode(&mut config);
    let _ = &config.database.host;
}
