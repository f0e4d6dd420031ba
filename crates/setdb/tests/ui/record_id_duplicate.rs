use setdb::Record;

#[derive(Record)]
#[allow(dead_code)]
struct Twice {
    #[record(id)]
    first: u64,
    #[record(id)]
    second: u64,
}

fn main() {}
