use setdb::Record;

#[derive(Record)]
#[record(name = "")]
#[allow(dead_code)]
struct Unnamed {
    id: u64,
}

fn main() {}
