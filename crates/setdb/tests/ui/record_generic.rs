use setdb::Record;

#[derive(Record)]
#[allow(dead_code)]
struct Wrapper<T> {
    id: u64,
    value: T,
}

fn main() {}
