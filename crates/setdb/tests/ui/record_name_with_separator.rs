use setdb::Record;

#[derive(Record)]
#[record(name = "Bad:Name")]
#[allow(dead_code)]
struct Bad {
    id: u64,
}

fn main() {}
