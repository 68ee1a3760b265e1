//! Generic structs keep their bounds and where clauses.

use envelope::Envelope;

#[derive(Clone, Default, Envelope)]
struct Database {
    #[envelope("DATABASE_ADDR")]
    addr: String,
}

#[derive(Clone, Default, Envelope)]
struct Layered<T>
where
    T: Envelope + Clone + Default,
{
    #[envelope("LAYER_NAME")]
    name: String,

    inner: T,
}

fn main() {
    let layered: Result<Layered<Database>, envelope::Error> = envelope::from_env();
    let _ = layered.map(|l| (l.name, l.inner.addr));
}
