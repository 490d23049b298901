fn main() {
    let all = pennant::bool_p("all", "a", false, "Show everything.").unwrap();
    let long = pennant::bool_s("l", false, "Long format.").unwrap();
    pennant::parse();

    println!("all: {}", all.get());
    println!("long: {}", long.get());

    for arg in pennant::args() {
        println!("{arg}");
    }
}
