use setdb::Record;

#[derive(Record)]
#[allow(dead_code)]
struct NoId {
    name: String,
}

fn main() {}
